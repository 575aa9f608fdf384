//! Client release matrix tests against a mock feed

mod helper;

use helper::{CLIENT_FEED, serve_feed};
use release_matrix::parser::ClientReleaseParser;
use release_matrix::release::matrix::build_matrix;
use release_matrix::release::{ClientKind, MatrixOptionKind, ReleaseError, ReleaseFilter};
use release_matrix::source::HttpSource;

#[tokio::test]
async fn latest_patch_versions_of_node_client() {
    let (server, mock) = serve_feed("/imdg-clients.txt", CLIENT_FEED).await;
    let parser = ClientReleaseParser::new(
        ClientKind::Node,
        &format!("{}/imdg-clients.txt", server.url()),
    );
    let filters = vec![ReleaseFilter::major_versions([4])];

    let releases = parser
        .get_all_releases(&HttpSource::new(), &filters)
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(releases.iter().all(|r| r.kind() == Some(ClientKind::Node)));
    assert_eq!(
        build_matrix(&releases, true, MatrixOptionKind::Version).unwrap(),
        vec!["4.2.0", "4.1.0", "4.0.2"]
    );
}

#[tokio::test]
async fn stable_filter_drops_preview_releases() {
    let (server, _mock) = serve_feed("/imdg-clients.txt", CLIENT_FEED).await;
    let parser =
        ClientReleaseParser::new(ClientKind::Go, &format!("{}/imdg-clients.txt", server.url()));

    let releases = parser
        .get_all_releases(&HttpSource::new(), &[ReleaseFilter::Stable])
        .await
        .unwrap();

    assert_eq!(
        build_matrix(&releases, false, MatrixOptionKind::Tag).unwrap(),
        vec!["v1.0.0"]
    );
}

#[tokio::test]
async fn missing_client_section_names_the_client() {
    let (server, _mock) = serve_feed("/imdg-clients.txt", CLIENT_FEED).await;
    let parser =
        ClientReleaseParser::new(ClientKind::Py, &format!("{}/imdg-clients.txt", server.url()));

    let result = parser.get_all_releases(&HttpSource::new(), &[]).await;

    match result {
        Err(ReleaseError::MalformedSourceDocument { section, .. }) => {
            assert!(section.contains("Python"), "unexpected section: {section}");
        }
        other => panic!("expected MalformedSourceDocument, got {other:?}"),
    }
}
