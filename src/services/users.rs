use crate::columns::column_controls;
use crate::domain::listing::{ListingQuery, SearchIntent, SortIntent};
use crate::dto::users::UsersPageData;
use crate::links::RequestUrl;
use crate::pagination::{PaginationState, page_controls};
use crate::repository::{UserCollection, UserReader};
use crate::services::ServiceResult;

/// Loads one page of the user table for the request at `url`.
///
/// Search is applied first, then ordering; totals are computed on the
/// filtered set before it is cut down to `page_size` rows.
pub fn load_users_page<R>(repo: &R, url: &RequestUrl, page_size: usize) -> ServiceResult<UsersPageData>
where
    R: UserReader + ?Sized,
{
    let query = ListingQuery::from(url);

    let users = repo.list_users().map_err(|err| {
        log::error!("Failed to list users: {err}");
        err
    })?;
    let users = search(&users, &query.search);
    let users = order(&users, &query.sort);

    let pagination = PaginationState::new(users.count(), page_size, query.page.requested);
    let page_controls = page_controls(url, &pagination);
    let users = paginate(&users, &pagination);
    let column_controls = column_controls(url, &query.sort);

    log::debug!(
        "Listing users: search={:?} sort={:?} page {}/{} ({} matches)",
        query.search.term,
        query.sort,
        pagination.current_page,
        pagination.total_pages,
        pagination.total_items
    );

    Ok(UsersPageData {
        users: users.into_vec(),
        search_term: query.search.term,
        column_controls,
        page_controls,
        pagination,
    })
}

pub fn search(users: &UserCollection, intent: &SearchIntent) -> UserCollection {
    if intent.is_empty() {
        return users.clone();
    }
    users.filter(&intent.fields, &intent.term)
}

pub fn order(users: &UserCollection, intent: &SortIntent) -> UserCollection {
    match intent.column {
        Some(column) => users.order(column, intent.descending),
        None => users.clone(),
    }
}

pub fn paginate(users: &UserCollection, state: &PaginationState) -> UserCollection {
    let users = if state.current_page > 1 {
        users.offset(state.offset())
    } else {
        users.clone()
    };
    users.limit(state.page_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::TypeConstraintError;
    use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
    use crate::repository::InMemoryRepository;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;
    use crate::services::ServiceError;

    fn load(query: &str) -> UsersPageData {
        let repo = InMemoryRepository::fixture().expect("fixture is valid");
        let url = RequestUrl::parse("/users", query);
        load_users_page(&repo, &url, DEFAULT_ITEMS_PER_PAGE).expect("listing succeeds")
    }

    fn ids(data: &UsersPageData) -> Vec<i32> {
        data.users.iter().map(|u| u.id.get()).collect()
    }

    fn labels(data: &UsersPageData) -> Vec<&str> {
        data.page_controls.iter().map(|c| c.label.as_str()).collect()
    }

    #[test]
    fn first_page_without_query() {
        let data = load("");

        assert_eq!(ids(&data), vec![1, 2, 3, 4, 5]);
        assert_eq!(data.pagination.total_items, 14);
        assert_eq!(data.pagination.total_pages, 3);
        assert_eq!(data.pagination.current_page, 1);
        assert_eq!(labels(&data), vec!["Previous", "1", "2", "3", "Next"]);
        assert!(data.page_controls[0].is_disabled);
        assert!(data.page_controls[1].is_active);
        assert_eq!(data.page_controls[4].url.as_deref(), Some("/users?page=2"));
    }

    #[test]
    fn search_is_case_insensitive_and_counted_before_paging() {
        let data = load("search=larry");

        assert_eq!(data.search_term, "larry");
        assert_eq!(data.pagination.total_items, 9);
        assert_eq!(data.pagination.total_pages, 2);
        assert_eq!(ids(&data), vec![3, 7, 8, 9, 10]);

        let second = load("search=LARRY&page=2");
        assert_eq!(ids(&second), vec![11, 12, 13, 14]);
    }

    #[test]
    fn search_without_matches_still_has_one_page() {
        let data = load("search=nobody");

        assert!(data.users.is_empty());
        assert_eq!(data.pagination.total_pages, 1);
        assert!(data.page_controls.is_empty());
    }

    #[test]
    fn descending_order_breaks_ties_by_descending_id() {
        let data = load("order=-last");

        // Nine "the Bird" rows lead; lower-case sorts after every capital.
        assert_eq!(ids(&data), vec![14, 13, 12, 11, 10]);

        let last_page = load("order=-last&page=3");
        let lasts: Vec<_> = last_page.users.iter().map(|u| u.last.as_str()).collect();
        assert_eq!(lasts, vec!["Rush", "Otto", "Foolery", "Cruise"]);
    }

    #[test]
    fn ascending_order_sorts_by_value_then_id() {
        let data = load("order=first");
        let firsts: Vec<_> = data.users.iter().map(|u| u.first.as_str()).collect();

        assert_eq!(firsts, vec!["Cecilia", "Emily", "Jacob", "Larry", "Larry"]);
        assert_eq!(ids(&data)[3..], [3, 7]);
        assert!(data.column_controls[1].is_sorted);
        assert_eq!(
            data.column_controls[1].url.as_deref(),
            Some("/users?order=-first")
        );
    }

    #[test]
    fn out_of_range_page_is_clamped() {
        let data = load("page=999");

        assert_eq!(data.pagination.current_page, 3);
        assert_eq!(ids(&data), vec![11, 12, 13, 14]);
        let next = data.page_controls.last().expect("next control");
        assert!(next.is_disabled);
        assert_eq!(
            data.page_controls[0].url.as_deref(),
            Some("/users?page=2")
        );
    }

    #[test]
    fn malformed_page_and_order_fall_back_to_defaults() {
        let data = load("page=abc&order=password");

        assert_eq!(data.pagination.current_page, 1);
        assert_eq!(ids(&data), vec![1, 2, 3, 4, 5]);
        assert!(data.column_controls.iter().all(|c| !c.is_sorted));
    }

    #[test]
    fn unrelated_params_survive_in_links() {
        let data = load("theme=dark&page=2");

        assert_eq!(
            data.page_controls[0].url.as_deref(),
            Some("/users?theme=dark")
        );
        assert_eq!(
            data.column_controls[2].url.as_deref(),
            Some("/users?theme=dark&page=2&order=last")
        );
    }

    #[test]
    fn paginate_is_a_window_over_the_collection() {
        let repo = InMemoryRepository::fixture().expect("fixture is valid");
        let users = repo.list_users().expect("listing succeeds");

        let page = paginate(&users, &PaginationState::new(users.count(), 4, Some(4)));
        let ids: Vec<_> = page.iter().map(|u| u.id.get()).collect();
        assert_eq!(ids, vec![13, 14]);
    }

    #[test]
    fn repository_failure_is_propagated() {
        let mut repo = MockRepository::new();
        repo.expect_list_users()
            .times(1)
            .returning(|| Err(RepositoryError::ConnectionError("offline".to_string())));

        let url = RequestUrl::parse("/users", "");
        let result = load_users_page(&repo, &url, DEFAULT_ITEMS_PER_PAGE);

        assert!(matches!(
            result,
            Err(ServiceError::Repository(RepositoryError::ConnectionError(_)))
        ));
    }

    #[test]
    fn type_constraint_errors_convert() {
        let err: ServiceError = TypeConstraintError::NonPositiveId.into();

        assert!(matches!(err, ServiceError::TypeConstraint(_)));
    }
}
