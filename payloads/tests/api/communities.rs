use reqwest::StatusCode;

use payloads::requests;

use test_helpers::{assert_status_code, mock, spawn_app};

fn create_details(
    name: &str,
    description: &str,
) -> requests::CreateCommunity {
    requests::CreateCommunity {
        name: name.to_string(),
        description: description.to_string(),
    }
}

#[tokio::test]
async fn fresh_app_has_no_communities() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let communities = app.client.get_communities().await?;
    assert!(communities.is_empty());

    Ok(())
}

#[tokio::test]
async fn communities_are_listed_in_insertion_order() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.seed_communities(&[
        ("Engineering", "Team chat"),
        ("Book Club", "Monthly reads"),
        ("Climbing", "Carpools"),
    ]);

    let communities = app.client.get_communities().await?;
    let names: Vec<_> = communities.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Engineering", "Book Club", "Climbing"]);

    Ok(())
}

#[tokio::test]
async fn created_community_appears_in_next_fetch() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let id = app
        .client
        .create_community(&create_details("Eng", "Team chat"))
        .await?;

    let communities = app.client.get_communities().await?;
    assert_eq!(communities.len(), 1);
    let community = &communities[0];
    assert_eq!(community.id, id);
    assert_eq!(community.name, "Eng");
    assert_eq!(community.description, "Team chat");

    Ok(())
}

#[tokio::test]
async fn description_only_submission_is_accepted() -> anyhow::Result<()> {
    // The create form enables submit when either field is non-empty, so
    // the server must accept an empty name.
    let app = spawn_app().await;

    app.client
        .create_community(&create_details("", "Team chat"))
        .await?;

    let communities = app.client.get_communities().await?;
    assert_eq!(communities.len(), 1);
    assert_eq!(communities[0].name, "");
    assert_eq!(communities[0].description, "Team chat");

    Ok(())
}

#[tokio::test]
async fn long_community_name_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let body = requests::CreateCommunity {
        name: (0..300).map(|_| "X").collect::<String>(),
        description: String::new(),
    };
    let result = app.client.create_community(&body).await;

    assert_status_code(result, StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn list_failure_surfaces_server_status() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.communities.set_fail_requests(true);

    let result = app.client.get_communities().await;
    assert_status_code(result, StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}

#[tokio::test]
async fn create_failure_leaves_list_unchanged() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.communities.set_fail_requests(true);

    let result = app
        .client
        .create_community(&create_details("Eng", "Team chat"))
        .await;
    assert_status_code(result, StatusCode::INTERNAL_SERVER_ERROR);

    app.communities.set_fail_requests(false);
    let communities = app.client.get_communities().await?;
    assert!(communities.is_empty());

    Ok(())
}

#[tokio::test]
async fn demo_dataset_seeds_through_the_api() -> anyhow::Result<()> {
    let app = spawn_app().await;

    mock::seed_demo_communities(&app).await?;

    let communities = app.client.get_communities().await?;
    assert_eq!(communities.len(), mock::DEMO_COMMUNITIES.len());

    Ok(())
}
