use crate::support::*;
use catalog_search::models::{OpportunitySearchRequest, OpportunityStage};
use catalog_search::search::OpportunitySearch;
use catalog_search::CallerContext;

async fn find(
    caller: &CallerContext,
    request: OpportunitySearchRequest,
) -> anyhow::Result<Vec<i64>> {
    let page = service()
        .search_opportunities(caller, &request, &everything())
        .await?;
    assert_eq!(page.total, page.rows.len() as u64);
    Ok(ids(&page))
}

#[tokio::test]
async fn overdue_compares_against_the_search_date() -> anyhow::Result<()> {
    // Pinned to the fixture date; the service itself searches as of today.
    let caller = admin();
    let request = OpportunitySearchRequest {
        overdue: Some(true),
        ..Default::default()
    };
    let spec = OpportunitySearch::new(&request, context(&caller));
    assert_eq!(matching(&service(), &spec).await?, vec![1]);

    let request = OpportunitySearchRequest {
        overdue: Some(false),
        ..Default::default()
    };
    let spec = OpportunitySearch::new(&request, context(&caller));
    assert_eq!(matching(&service(), &spec).await?, vec![3, 2]);
    Ok(())
}

#[tokio::test]
async fn keyword_covers_candidate_and_job() -> anyhow::Result<()> {
    let by_name = find(
        &admin(),
        OpportunitySearchRequest {
            keyword: Some("smith".into()),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(by_name, vec![3]);

    let by_number = find(
        &admin(),
        OpportunitySearchRequest {
            keyword: Some("1002".into()),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(by_number, vec![2]);
    Ok(())
}

#[tokio::test]
async fn jobs_candidates_and_stages() -> anyhow::Result<()> {
    let jobs = find(
        &admin(),
        OpportunitySearchRequest {
            job_ids: vec![1],
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(jobs, vec![3, 1]);

    let candidates = find(
        &admin(),
        OpportunitySearchRequest {
            candidate_ids: vec![2],
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(candidates, vec![2]);

    let stages = find(
        &admin(),
        OpportunitySearchRequest {
            stages: vec![OpportunityStage::Offer, OpportunityStage::Testing],
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(stages, vec![3, 2]);

    let open = find(
        &admin(),
        OpportunitySearchRequest {
            sf_opp_closed: Some(false),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(open, vec![2, 1]);
    Ok(())
}

#[tokio::test]
async fn source_partner_ownership_follows_the_candidate() -> anyhow::Result<()> {
    let caller = admin();
    let mine = find(
        &caller,
        OpportunitySearchRequest {
            owned_by_me: Some(true),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(mine, vec![3, 1]);

    let partner = find(
        &caller,
        OpportunitySearchRequest {
            owned_by_my_partner: Some(true),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(partner, vec![2, 1]);
    Ok(())
}

#[tokio::test]
async fn job_creator_ownership_follows_the_job() -> anyhow::Result<()> {
    let caller = job_creator();
    let mine = find(
        &caller,
        OpportunitySearchRequest {
            owned_by_me: Some(true),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(mine, vec![3, 1]);

    let partner = find(
        &caller,
        OpportunitySearchRequest {
            owned_by_my_partner: Some(true),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(partner, vec![3, 2, 1]);
    Ok(())
}

#[tokio::test]
async fn rows_carry_candidate_and_job() -> anyhow::Result<()> {
    let page = service()
        .search_opportunities(
            &admin(),
            &OpportunitySearchRequest {
                candidate_ids: vec![1],
                ..Default::default()
            },
            &everything(),
        )
        .await?;
    let row = &page.rows[0];
    assert_eq!(row["candidate"]["candidate_number"], "1001");
    assert_eq!(row["candidate"]["user"]["first_name"], "John");
    assert_eq!(row["job_opp"]["name"], "Registered Nurse");
    Ok(())
}
