use user_listing::links::RequestUrl;
use user_listing::pagination::{DEFAULT_ITEMS_PER_PAGE, PageControl};
use user_listing::repository::InMemoryRepository;
use user_listing::services::users::load_users_page;

fn control(label: &str, url: Option<&str>, is_active: bool, is_disabled: bool) -> PageControl {
    PageControl {
        label: label.to_string(),
        url: url.map(str::to_string),
        is_active,
        is_disabled,
    }
}

#[test]
fn fourteen_users_first_page_controls() {
    let repo = InMemoryRepository::fixture().expect("fixture is valid");
    let url = RequestUrl::parse("/users", "");

    let data = load_users_page(&repo, &url, DEFAULT_ITEMS_PER_PAGE).expect("listing succeeds");

    assert_eq!(
        data.page_controls,
        vec![
            control("Previous", None, false, true),
            control("1", Some("/users"), true, false),
            control("2", Some("/users?page=2"), false, false),
            control("3", Some("/users?page=3"), false, false),
            control("Next", Some("/users?page=2"), false, false),
        ]
    );
}

#[test]
fn second_page_previous_link_drops_page() {
    let repo = InMemoryRepository::fixture().expect("fixture is valid");
    let url = RequestUrl::parse("/users", "order=handle&page=2");

    let data = load_users_page(&repo, &url, DEFAULT_ITEMS_PER_PAGE).expect("listing succeeds");

    assert_eq!(data.page_controls[0], control("Previous", Some("/users?order=handle"), false, false));
    assert_eq!(
        data.page_controls[4],
        control("Next", Some("/users?order=handle&page=3"), false, false)
    );
}

#[test]
fn custom_page_size_from_json_source() {
    let repo = InMemoryRepository::from_json_str(
        r#"[
            {"id": 1, "first": "Ada", "last": "Lovelace", "handle": "@ada"},
            {"id": 2, "first": "Alan", "last": "Turing", "handle": "@alan"},
            {"id": 3, "first": "Grace", "last": "Hopper", "handle": "@grace"}
        ]"#,
    )
    .expect("valid json");
    let url = RequestUrl::parse("/users", "search=a&order=-first&page=2");

    let data = load_users_page(&repo, &url, 2).expect("listing succeeds");

    assert_eq!(data.pagination.total_items, 3);
    assert_eq!(data.pagination.total_pages, 2);
    let firsts: Vec<_> = data.users.iter().map(|u| u.first.as_str()).collect();
    assert_eq!(firsts, vec!["Ada"]);
}
