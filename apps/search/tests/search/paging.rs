use crate::support::*;
use catalog_query::{Direction, PageRequest};
use catalog_search::db::MemoryExecutor;
use catalog_search::models::CandidateSearchRequest;
use catalog_search::{Error, SearchService};

/// Walks every page of the status-sorted candidate list.
async fn all_pages(service: &SearchService<MemoryExecutor>, size: u32) -> anyhow::Result<Vec<i64>> {
    let caller = admin();
    let request = CandidateSearchRequest::default();
    let mut seen = Vec::new();
    let mut index = 0;
    loop {
        let page = service
            .search_candidates(
                &caller,
                &request,
                &PageRequest::new(index, size).sorted_by(["status"], Direction::Asc),
            )
            .await?;
        if page.rows.is_empty() {
            return Ok(seen);
        }
        assert!(page.rows.len() <= size as usize);
        assert_eq!(page.page_size, size);
        seen.extend(ids(&page));
        index += 1;
    }
}

#[tokio::test]
async fn ties_break_on_id_so_pages_partition_the_results() -> anyhow::Result<()> {
    let ids = all_pages(&service(), 2).await?;
    assert_eq!(ids, vec![3, 2, 1, 4, 5]);
    Ok(())
}

#[tokio::test]
async fn new_rows_keep_the_relative_order() -> anyhow::Result<()> {
    let mut data = catalog();
    data.insert("candidate", CandidateBuilder::new(6).build());
    let ids = all_pages(&service_over(data), 2).await?;
    assert_eq!(ids, vec![6, 3, 2, 1, 4, 5]);
    Ok(())
}

#[tokio::test]
async fn page_totals() -> anyhow::Result<()> {
    let page = service()
        .search_candidates(
            &admin(),
            &CandidateSearchRequest::default(),
            &PageRequest::new(1, 2),
        )
        .await?;
    assert_eq!(ids(&page), vec![3, 2]);
    assert_eq!(page.total, 5);
    assert_eq!(page.page_index, 1);
    assert_eq!(page.total_pages(), 3);

    let past_the_end = service()
        .search_candidates(
            &admin(),
            &CandidateSearchRequest::default(),
            &PageRequest::new(10, 2),
        )
        .await?;
    assert!(past_the_end.rows.is_empty());
    assert_eq!(past_the_end.total, 5);
    Ok(())
}

#[tokio::test]
async fn missing_values_sort_last_both_ways() -> anyhow::Result<()> {
    let request = CandidateSearchRequest::default();
    let ascending = service()
        .search_candidates(
            &admin(),
            &request,
            &everything().sorted_by(["dob"], Direction::Asc),
        )
        .await?;
    assert_eq!(ids(&ascending), vec![5, 2, 1, 4, 3]);

    let descending = service()
        .search_candidates(
            &admin(),
            &request,
            &everything().sorted_by(["dob"], Direction::Desc),
        )
        .await?;
    assert_eq!(ids(&descending), vec![4, 1, 2, 5, 3]);
    Ok(())
}

#[tokio::test]
async fn bad_pages_and_sorts_are_client_errors() {
    let service = service();
    let caller = admin();
    let request = CandidateSearchRequest::default();

    for page in [
        PageRequest::new(0, 0),
        PageRequest::new(0, 10_000),
        everything().sorted_by(["shoe_size"], Direction::Asc),
        everything().sorted_by(["candidate_occupations.years_experience"], Direction::Asc),
    ] {
        let err = service
            .search_candidates(&caller, &request, &page)
            .await
            .unwrap_err();
        assert!(err.is_client_error(), "{err}");
    }

    let err = service
        .search_candidates(
            &caller,
            &request,
            &everything().sorted_by(["candidate_occupations.years_experience"], Direction::Asc),
        )
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Query(catalog_query::Error::UnsortablePath { .. })
    ));
}

#[tokio::test]
async fn invalid_requests_are_rejected_before_querying() {
    let request = CandidateSearchRequest {
        max_age: Some(500),
        ..Default::default()
    };
    let err = service()
        .search_candidates(&admin(), &request, &everything())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}
