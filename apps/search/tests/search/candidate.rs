use crate::support::*;
use catalog_query::{assemble, Column, Condition, QueryMode, SearchType, SortRequest, Value};
use catalog_search::models::{CandidateSearchRequest, CandidateStatus, Gender, UnhcrStatus};
use catalog_search::search::{CandidateSearch, SearchContext};
use catalog_search::{CallerContext, Error};

async fn find(caller: &CallerContext, request: CandidateSearchRequest) -> anyhow::Result<Vec<i64>> {
    matching(&service(), &CandidateSearch::new(&request, context(caller))).await
}

async fn find_as_admin(request: CandidateSearchRequest) -> anyhow::Result<Vec<i64>> {
    find(&admin(), request).await
}

// ---------------------------------------------------------------------------
// Keyword and caller scope
// ---------------------------------------------------------------------------

#[tokio::test]
async fn john_doe_within_the_callers_countries() -> anyhow::Result<()> {
    let caller = admin().with_permitted_countries([10, 20]);
    let request = CandidateSearchRequest {
        keyword: Some("John Doe".into()),
        statuses: vec![CandidateStatus::Active],
        country_ids: vec![],
        ..Default::default()
    };

    let query = assemble(
        &CandidateSearch::new(&request, context(&caller)),
        QueryMode::Count,
        &SortRequest::default(),
    )?;
    let Condition::And { terms } = query.condition() else {
        panic!("expected a conjunction, got {:?}", query.condition());
    };
    assert_eq!(terms.len(), 4, "two tokens, status, default country scope");
    assert!(matches!(terms[0], Condition::Or { .. }));
    assert!(matches!(terms[1], Condition::Or { .. }));
    assert_eq!(
        terms[3],
        Condition::in_values(
            Column::root("country_id"),
            vec![Value::Int(10), Value::Int(20)]
        )
    );

    assert_eq!(find(&caller, request).await?, vec![1]);
    Ok(())
}

#[tokio::test]
async fn every_keyword_token_must_match_some_field() -> anyhow::Result<()> {
    let ids = find_as_admin(CandidateSearchRequest {
        keyword: Some("doe".into()),
        ..Default::default()
    })
    .await?;
    assert_eq!(ids, vec![2, 1]);

    let ids = find_as_admin(CandidateSearchRequest {
        keyword: Some("john, nurse".into()),
        ..Default::default()
    })
    .await?;
    assert_eq!(ids, vec![3, 1]);
    Ok(())
}

#[tokio::test]
async fn keyword_matches_candidate_number_exactly() -> anyhow::Result<()> {
    let ids = find_as_admin(CandidateSearchRequest {
        keyword: Some("1004".into()),
        ..Default::default()
    })
    .await?;
    assert_eq!(ids, vec![4]);

    let ids = find_as_admin(CandidateSearchRequest {
        keyword: Some("100".into()),
        ..Default::default()
    })
    .await?;
    assert!(ids.is_empty());
    Ok(())
}

#[tokio::test]
async fn blank_keyword_does_not_filter() -> anyhow::Result<()> {
    let ids = find_as_admin(CandidateSearchRequest {
        keyword: Some("  ,. ".into()),
        ..Default::default()
    })
    .await?;
    assert_eq!(ids, vec![5, 4, 3, 2, 1]);
    Ok(())
}

#[tokio::test]
async fn explicit_countries_replace_the_default_scope() -> anyhow::Result<()> {
    let caller = admin().with_permitted_countries([10, 20]);
    let ids = find(
        &caller,
        CandidateSearchRequest {
            country_ids: vec![30],
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(ids, vec![3]);

    let ids = find(&caller, CandidateSearchRequest::default()).await?;
    assert_eq!(ids, vec![4, 2, 1]);
    Ok(())
}

#[tokio::test]
async fn excluded_countries_drop_unknown_countries() -> anyhow::Result<()> {
    let ids = find_as_admin(CandidateSearchRequest {
        country_ids: vec![30],
        country_search_type: Some(SearchType::Not),
        ..Default::default()
    })
    .await?;
    assert_eq!(ids, vec![4, 2, 1]);
    Ok(())
}

#[tokio::test]
async fn nationality_sets() -> anyhow::Result<()> {
    let ids = find_as_admin(CandidateSearchRequest {
        nationality_ids: vec![20],
        ..Default::default()
    })
    .await?;
    assert_eq!(ids, vec![5, 2, 1]);

    let ids = find_as_admin(CandidateSearchRequest {
        nationality_ids: vec![20],
        nationality_search_type: Some(SearchType::Not),
        ..Default::default()
    })
    .await?;
    assert_eq!(ids, vec![4, 3]);
    Ok(())
}

// ---------------------------------------------------------------------------
// Categorical and relationship filters
// ---------------------------------------------------------------------------

#[tokio::test]
async fn categorical_sets() -> anyhow::Result<()> {
    let statuses = find_as_admin(CandidateSearchRequest {
        statuses: vec![CandidateStatus::Draft, CandidateStatus::Withdrawn],
        ..Default::default()
    })
    .await?;
    assert_eq!(statuses, vec![5, 4]);

    let gender = find_as_admin(CandidateSearchRequest {
        gender: vec![Gender::Female],
        ..Default::default()
    })
    .await?;
    assert_eq!(gender, vec![5, 2]);

    let unhcr = find_as_admin(CandidateSearchRequest {
        unhcr_statuses: vec![UnhcrStatus::RegisteredAsylum],
        ..Default::default()
    })
    .await?;
    assert_eq!(unhcr, vec![3]);
    Ok(())
}

#[tokio::test]
async fn empty_sets_are_absent() -> anyhow::Result<()> {
    let ids = find_as_admin(CandidateSearchRequest {
        statuses: vec![],
        occupation_ids: vec![],
        list_any_ids: vec![],
        ..Default::default()
    })
    .await?;
    assert_eq!(ids.len(), 5);
    Ok(())
}

#[tokio::test]
async fn occupation_and_experience_hold_on_the_same_row() -> anyhow::Result<()> {
    // Candidate 3 is a nurse (1y) and a cook (10y); neither row satisfies both.
    let ids = find_as_admin(CandidateSearchRequest {
        occupation_ids: vec![100],
        min_yrs: Some(2),
        ..Default::default()
    })
    .await?;
    assert_eq!(ids, vec![1]);

    let ids = find_as_admin(CandidateSearchRequest {
        max_yrs: Some(3),
        ..Default::default()
    })
    .await?;
    assert_eq!(ids, vec![3, 2]);
    Ok(())
}

#[tokio::test]
async fn related_entity_filters() -> anyhow::Result<()> {
    let partners = find_as_admin(CandidateSearchRequest {
        partner_ids: vec![3],
        ..Default::default()
    })
    .await?;
    assert_eq!(partners, vec![3]);

    let surveys = find_as_admin(CandidateSearchRequest {
        survey_type_ids: vec![300],
        ..Default::default()
    })
    .await?;
    assert_eq!(surveys, vec![1]);

    let majors = find_as_admin(CandidateSearchRequest {
        education_major_ids: vec![200],
        ..Default::default()
    })
    .await?;
    assert_eq!(majors, vec![1]);

    let level = find_as_admin(CandidateSearchRequest {
        min_education_level: Some(4),
        ..Default::default()
    })
    .await?;
    assert_eq!(level, vec![2]);
    Ok(())
}

// ---------------------------------------------------------------------------
// Languages
// ---------------------------------------------------------------------------

#[tokio::test]
async fn english_levels() -> anyhow::Result<()> {
    let spoken = find_as_admin(CandidateSearchRequest {
        english_min_spoken_level: Some(2),
        ..Default::default()
    })
    .await?;
    assert_eq!(spoken, vec![4, 1]);

    let both = find_as_admin(CandidateSearchRequest {
        english_min_spoken_level: Some(2),
        english_min_written_level: Some(3),
        ..Default::default()
    })
    .await?;
    assert_eq!(both, vec![4]);
    Ok(())
}

#[tokio::test]
async fn other_language_levels() -> anyhow::Result<()> {
    let any_level = find_as_admin(CandidateSearchRequest {
        other_language_id: Some(ARABIC),
        ..Default::default()
    })
    .await?;
    assert_eq!(any_level, vec![3, 1]);

    let written = find_as_admin(CandidateSearchRequest {
        other_language_id: Some(ARABIC),
        other_min_written_level: Some(2),
        ..Default::default()
    })
    .await?;
    assert_eq!(written, vec![1]);
    Ok(())
}

#[tokio::test]
async fn english_filters_need_a_configured_language() -> anyhow::Result<()> {
    let caller = admin();
    let request = CandidateSearchRequest {
        english_min_written_level: Some(1),
        ..Default::default()
    };
    let spec = CandidateSearch::new(&request, SearchContext::new(&caller, as_of()));
    let err = service().search(&spec, &everything()).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Query(catalog_query::Error::MissingContext(_))
    ));
    assert!(!err.is_client_error());
    Ok(())
}

// ---------------------------------------------------------------------------
// Dates and tri-states
// ---------------------------------------------------------------------------

#[tokio::test]
async fn age_bounds_keep_unknown_birth_dates() -> anyhow::Result<()> {
    let ids = find_as_admin(CandidateSearchRequest {
        min_age: Some(30),
        max_age: Some(40),
        ..Default::default()
    })
    .await?;
    assert_eq!(ids, vec![3, 2, 1]);
    Ok(())
}

#[tokio::test]
async fn max_age_counts_whole_years() -> anyhow::Result<()> {
    // Candidate 2 turns 39 on the build date.
    let ids = find_as_admin(CandidateSearchRequest {
        max_age: Some(38),
        ..Default::default()
    })
    .await?;
    assert_eq!(ids, vec![4, 3, 1]);

    let ids = find_as_admin(CandidateSearchRequest {
        max_age: Some(39),
        ..Default::default()
    })
    .await?;
    assert_eq!(ids, vec![4, 3, 2, 1]);

    let ids = find_as_admin(CandidateSearchRequest {
        min_age: Some(24),
        ..Default::default()
    })
    .await?;
    assert_eq!(ids, vec![5, 4, 3, 2, 1]);
    Ok(())
}

#[tokio::test]
async fn registration_dates_include_the_whole_last_day() -> anyhow::Result<()> {
    let ids = find_as_admin(CandidateSearchRequest {
        rego_from: Some(date(2024, 1, 10)),
        rego_to: Some(date(2024, 1, 31)),
        ..Default::default()
    })
    .await?;
    assert_eq!(ids, vec![2, 1]);

    let ids = find_as_admin(CandidateSearchRequest {
        last_modified_from: Some(date(2024, 2, 1)),
        ..Default::default()
    })
    .await?;
    assert_eq!(ids, vec![1]);
    Ok(())
}

#[tokio::test]
async fn tri_state_flags() -> anyhow::Result<()> {
    let not_duplicate = find_as_admin(CandidateSearchRequest {
        potential_duplicate: Some(false),
        ..Default::default()
    })
    .await?;
    assert_eq!(not_duplicate, vec![5, 4, 3, 1]);

    let duplicate = find_as_admin(CandidateSearchRequest {
        potential_duplicate: Some(true),
        ..Default::default()
    })
    .await?;
    assert_eq!(duplicate, vec![2]);

    let mini = find_as_admin(CandidateSearchRequest {
        mini_intake_completed: Some(true),
        ..Default::default()
    })
    .await?;
    assert_eq!(mini, vec![1]);

    let no_full = find_as_admin(CandidateSearchRequest {
        full_intake_completed: Some(false),
        ..Default::default()
    })
    .await?;
    assert_eq!(no_full, vec![5, 3, 2, 1]);
    Ok(())
}

#[tokio::test]
async fn referrer_ignores_case_and_padding() -> anyhow::Result<()> {
    let ids = find_as_admin(CandidateSearchRequest {
        rego_referrer_param: Some("  FACEBOOK ".into()),
        ..Default::default()
    })
    .await?;
    assert_eq!(ids, vec![2, 1]);
    Ok(())
}

// ---------------------------------------------------------------------------
// Saved list membership
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_any_and_all() -> anyhow::Result<()> {
    let any = find_as_admin(CandidateSearchRequest {
        list_any_ids: vec![7, 9],
        ..Default::default()
    })
    .await?;
    assert_eq!(any, vec![3, 2, 1]);

    let all = find_as_admin(CandidateSearchRequest {
        list_all_ids: vec![7, 9],
        list_all_search_type: Some(SearchType::And),
        ..Default::default()
    })
    .await?;
    assert_eq!(all, vec![1]);
    Ok(())
}

#[tokio::test]
async fn list_all_with_not_returns_rows_in_neither_list() -> anyhow::Result<()> {
    let ids = find_as_admin(CandidateSearchRequest {
        list_all_ids: vec![7, 9],
        list_all_search_type: Some(SearchType::Not),
        ..Default::default()
    })
    .await?;
    assert_eq!(ids, vec![5, 4]);

    let any_not = find_as_admin(CandidateSearchRequest {
        list_any_ids: vec![7, 9],
        list_any_search_type: Some(SearchType::Not),
        ..Default::default()
    })
    .await?;
    assert_eq!(any_not, ids);
    Ok(())
}

#[tokio::test]
async fn exclusion_list() -> anyhow::Result<()> {
    let ids = find_as_admin(CandidateSearchRequest {
        exclusion_list_id: Some(7),
        ..Default::default()
    })
    .await?;
    assert_eq!(ids, vec![5, 4, 3]);
    Ok(())
}

// ---------------------------------------------------------------------------
// Rows
// ---------------------------------------------------------------------------

#[tokio::test]
async fn rows_carry_user_partner_and_countries() -> anyhow::Result<()> {
    let caller = admin();
    let request = CandidateSearchRequest {
        keyword: Some("john doe".into()),
        ..Default::default()
    };
    let page = service()
        .search_candidates(&caller, &request, &everything())
        .await?;
    let row = &page.rows[0];
    assert_eq!(row["candidate_number"], "1001");
    assert_eq!(row["user"]["last_name"], "Doe");
    assert_eq!(row["user"]["partner"]["name"], "Hope Partners");
    assert_eq!(row["country"]["name"], "Jordan");
    assert_eq!(row["nationality"]["name"], "Lebanon");
    assert!(row.get("candidate_occupations").is_none());
    Ok(())
}

#[tokio::test]
async fn sorts_through_relationships() -> anyhow::Result<()> {
    let caller = admin();
    let page = service()
        .search_candidates(
            &caller,
            &CandidateSearchRequest::default(),
            &everything().sorted_by(["user.last_name"], Default::default()),
        )
        .await?;
    assert_eq!(ids(&page), vec![2, 1, 4, 5, 3]);
    Ok(())
}
