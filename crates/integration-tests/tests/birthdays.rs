//! Upcoming-birthday queries against stored contacts.

use rolodex_directory::birthdays::{BirthdayWindow, upcoming_birthdays};
use rolodex_integration_tests::{TestContext, date, nth_draft};

#[tokio::test]
async fn window_includes_only_birthdays_after_today_up_to_end() {
    let ctx = TestContext::new().await;
    let contacts = ctx.contacts();

    // Years differ on purpose; only (month, day) matters.
    contacts
        .create(&nth_draft(1, date(1991, 6, 5)), ctx.owner.id)
        .await
        .unwrap();
    contacts
        .create(&nth_draft(2, date(1985, 6, 1)), ctx.owner.id)
        .await
        .unwrap();
    contacts
        .create(&nth_draft(3, date(2000, 1, 1)), ctx.owner.id)
        .await
        .unwrap();
    contacts
        .create(&nth_draft(4, date(1979, 6, 8)), ctx.owner.id)
        .await
        .unwrap();

    let window = BirthdayWindow::new(date(2024, 6, 1), date(2024, 6, 8));
    let upcoming = upcoming_birthdays(&contacts, ctx.owner.id, window, 0, 100)
        .await
        .unwrap();

    let firsts: Vec<&str> = upcoming.iter().map(|c| c.first_name.as_str()).collect();
    // (6,5) and (6,8) fall in the window; (6,1) is the window start and
    // excluded; (1,1) is outside under the non-wrapping comparison.
    assert_eq!(firsts, vec!["First1", "First4"]);
}

#[tokio::test]
async fn pagination_applies_before_the_birthday_filter() {
    let ctx = TestContext::new().await;
    let contacts = ctx.contacts();

    contacts
        .create(&nth_draft(1, date(1991, 6, 5)), ctx.owner.id) // matches
        .await
        .unwrap();
    contacts
        .create(&nth_draft(2, date(1985, 3, 3)), ctx.owner.id) // does not
        .await
        .unwrap();
    contacts
        .create(&nth_draft(3, date(1993, 6, 6)), ctx.owner.id) // matches
        .await
        .unwrap();

    let window = BirthdayWindow::new(date(2024, 6, 1), date(2024, 6, 8));

    // The limit carves the base list first: the slice [First1, First2]
    // gets filtered, so First3's matching birthday never appears.
    let first_page = upcoming_birthdays(&contacts, ctx.owner.id, window, 0, 2)
        .await
        .unwrap();
    assert_eq!(first_page.len(), 1);
    assert_eq!(first_page[0].first_name.as_str(), "First1");

    // Skipping past the first two leaves only First3 in the slice.
    let second_page = upcoming_birthdays(&contacts, ctx.owner.id, window, 2, 2)
        .await
        .unwrap();
    assert_eq!(second_page.len(), 1);
    assert_eq!(second_page[0].first_name.as_str(), "First3");
}

#[tokio::test]
async fn birthdays_are_owner_scoped() {
    let ctx = TestContext::new().await;
    let contacts = ctx.contacts();

    contacts
        .create(&nth_draft(1, date(1991, 6, 5)), ctx.owner.id)
        .await
        .unwrap();
    contacts
        .create(&nth_draft(2, date(1991, 6, 6)), ctx.other.id)
        .await
        .unwrap();

    let window = BirthdayWindow::new(date(2024, 6, 1), date(2024, 6, 8));
    let upcoming = upcoming_birthdays(&contacts, ctx.owner.id, window, 0, 100)
        .await
        .unwrap();

    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].first_name.as_str(), "First1");
}

#[tokio::test]
async fn december_window_misses_january_birthdays() {
    let ctx = TestContext::new().await;
    let contacts = ctx.contacts();

    contacts
        .create(&nth_draft(1, date(1991, 1, 2)), ctx.owner.id)
        .await
        .unwrap();

    // Documented limitation: the window wraps into January on the
    // calendar, but the (month, day) comparison does not.
    let window = BirthdayWindow::days_ahead(date(2024, 12, 28), 7);
    let upcoming = upcoming_birthdays(&contacts, ctx.owner.id, window, 0, 100)
        .await
        .unwrap();

    assert!(upcoming.is_empty());
}
