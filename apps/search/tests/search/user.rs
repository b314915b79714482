use crate::support::*;
use catalog_search::caller::{OrganizationRole, UserRole};
use catalog_search::models::{Status, UserSearchRequest};
use catalog_search::CallerContext;

async fn find(caller: &CallerContext, request: UserSearchRequest) -> anyhow::Result<Vec<i64>> {
    let page = service()
        .search_users(caller, &request, &everything())
        .await?;
    Ok(ids(&page))
}

#[tokio::test]
async fn admins_see_every_organization() -> anyhow::Result<()> {
    let ids = find(&admin(), UserSearchRequest::default()).await?;
    assert_eq!(ids, vec![7, 6, 5, 4, 3, 2, 1]);
    Ok(())
}

#[tokio::test]
async fn partner_admins_see_their_own_organization() -> anyhow::Result<()> {
    let ids = find(&job_creator(), UserSearchRequest::default()).await?;
    assert_eq!(ids, vec![2]);

    // An explicit partner filter cannot widen the view.
    let ids = find(
        &job_creator(),
        UserSearchRequest {
            partner_id: Some(1),
            ..Default::default()
        },
    )
    .await?;
    assert!(ids.is_empty());
    Ok(())
}

#[tokio::test]
async fn callers_without_a_role_see_their_own_organization() -> anyhow::Result<()> {
    let caller = CallerContext::new(3, 1, OrganizationRole::SourcePartner);
    let ids = find(&caller, UserSearchRequest::default()).await?;
    assert_eq!(ids, vec![7, 6, 4, 3, 1]);
    Ok(())
}

#[tokio::test]
async fn user_filters() -> anyhow::Result<()> {
    let keyword = find(
        &admin(),
        UserSearchRequest {
            keyword: Some("doe".into()),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(keyword, vec![4, 3]);

    let roles = find(
        &admin(),
        UserSearchRequest {
            roles: vec![UserRole::Limited],
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(roles, vec![7, 6, 5, 4, 3]);

    let inactive = find(
        &admin(),
        UserSearchRequest {
            statuses: vec![Status::Inactive],
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(inactive, vec![7]);

    let partner = find(
        &admin(),
        UserSearchRequest {
            partner_id: Some(3),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(partner, vec![5]);
    Ok(())
}

#[tokio::test]
async fn rows_carry_the_partner() -> anyhow::Result<()> {
    let page = service()
        .search_users(
            &admin(),
            &UserSearchRequest {
                partner_id: Some(3),
                ..Default::default()
            },
            &everything(),
        )
        .await?;
    assert_eq!(page.rows[0]["partner"]["abbreviation"], "OLD");
    Ok(())
}
