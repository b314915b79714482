use crate::support::*;
use catalog_query::Direction;
use catalog_search::models::{PartnerSearchRequest, ReferenceSearchRequest, Status};
use catalog_search::schema::reference::ReferenceTable;
use catalog_search::CallerContext;

async fn find(
    caller: &CallerContext,
    table: ReferenceTable,
    request: ReferenceSearchRequest,
) -> anyhow::Result<Vec<i64>> {
    let page = service()
        .search_reference(caller, table, &request, &everything())
        .await?;
    Ok(ids(&page))
}

#[tokio::test]
async fn active_countries_by_name() -> anyhow::Result<()> {
    let request = ReferenceSearchRequest {
        statuses: vec![Status::Active],
        ..Default::default()
    };
    let page = service()
        .search_reference(
            &admin(),
            ReferenceTable::Country,
            &request,
            &everything().sorted_by(["name"], Direction::Asc),
        )
        .await?;
    assert_eq!(ids(&page), vec![30, 10, 20]);
    assert_eq!(page.total, 3);
    Ok(())
}

#[tokio::test]
async fn restricted_countries_follow_the_caller() -> anyhow::Result<()> {
    let restricted = ReferenceSearchRequest {
        restricted: Some(true),
        ..Default::default()
    };

    let caller = admin().with_permitted_countries([10, 20]);
    let ids = find(&caller, ReferenceTable::Country, restricted.clone()).await?;
    assert_eq!(ids, vec![20, 10]);

    let ids = find(&admin(), ReferenceTable::Country, restricted).await?;
    assert_eq!(ids, vec![40, 30, 20, 10]);
    Ok(())
}

#[tokio::test]
async fn restriction_only_applies_to_countries() -> anyhow::Result<()> {
    let caller = admin().with_permitted_countries([10, 20]);
    let ids = find(
        &caller,
        ReferenceTable::Language,
        ReferenceSearchRequest {
            restricted: Some(true),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(ids, vec![3, 2, 1]);
    Ok(())
}

#[tokio::test]
async fn keyword_matches_names() -> anyhow::Result<()> {
    let languages = find(
        &admin(),
        ReferenceTable::Language,
        ReferenceSearchRequest {
            keyword: Some("ara".into()),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(languages, vec![ARABIC]);

    let levels = find(
        &admin(),
        ReferenceTable::EducationLevel,
        ReferenceSearchRequest {
            keyword: Some("BACH".into()),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(levels, vec![2]);

    let occupations = find(&admin(), ReferenceTable::Occupation, Default::default()).await?;
    assert_eq!(occupations, vec![102, 101, 100]);
    Ok(())
}

async fn partners(request: PartnerSearchRequest) -> anyhow::Result<Vec<i64>> {
    let page = service().search_partners(&request, &everything()).await?;
    Ok(ids(&page))
}

#[tokio::test]
async fn partner_filters() -> anyhow::Result<()> {
    let creators = partners(PartnerSearchRequest {
        job_creator: Some(true),
        ..Default::default()
    })
    .await?;
    assert_eq!(creators, vec![2]);

    let not_creators = partners(PartnerSearchRequest {
        job_creator: Some(false),
        ..Default::default()
    })
    .await?;
    assert_eq!(not_creators, vec![3, 1]);

    let by_abbreviation = partners(PartnerSearchRequest {
        keyword: Some("acme".into()),
        ..Default::default()
    })
    .await?;
    assert_eq!(by_abbreviation, vec![2]);

    let active = partners(PartnerSearchRequest {
        statuses: vec![Status::Active],
        ..Default::default()
    })
    .await?;
    assert_eq!(active, vec![2, 1]);
    Ok(())
}
