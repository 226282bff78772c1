use crate::common::assert_report_is_success;
use crate::helpers::spawn_api;
use claims::assert_ok;
use fake::Fake;
use fake::faker::lorem::en::Sentence;
use favorites_acceptance::domain::{ConstraintViolation, FavoriteColor, FavoriteDraft};
use favorites_acceptance::suite::{Category, all_cases, cases_in};
use favorites_acceptance::validation::Verdict;

async fn assert_category_passes(category: Category) {
    // Arrange
    let test_api = spawn_api().await;
    let cases = cases_in(category);

    // Act
    let report = test_api.runner.run_all(&cases).await;

    // Assert
    assert_report_is_success(&report, cases.len());
}

#[tokio::test]
async fn baseline_favorites_are_created() {
    assert_category_passes(Category::Baseline).await;
}

#[tokio::test]
async fn color_matrix_passes() {
    assert_category_passes(Category::Color).await;
}

#[tokio::test]
async fn title_matrix_passes() {
    assert_category_passes(Category::Title).await;
}

#[tokio::test]
async fn latitude_matrix_passes() {
    assert_category_passes(Category::Latitude).await;
}

#[tokio::test]
async fn longitude_matrix_passes() {
    assert_category_passes(Category::Longitude).await;
}

#[tokio::test]
async fn the_whole_matrix_passes() {
    // Arrange
    let test_api = spawn_api().await;
    let cases = all_cases();

    // Act
    let report = test_api.runner.run_all(&cases).await;

    // Assert
    assert_report_is_success(&report, cases.len());
}

#[tokio::test]
async fn a_created_favorite_echoes_the_submitted_fields() {
    // Arrange
    let test_api = spawn_api().await;
    let credential = assert_ok!(test_api.client().authenticate().await);
    let draft = FavoriteDraft::new("TestTitle", -0.000001, 180.0).with_color("YELLOW");

    // Act
    let verdict = assert_ok!(
        test_api
            .runner
            .submit_and_validate(&credential, &draft)
            .await
    );

    // Assert
    match verdict {
        Verdict::Created(favorite) => {
            assert!(favorite.id > 0);
            assert_eq!(favorite.title, "TestTitle");
            assert_eq!(favorite.lat, -0.000001);
            assert_eq!(favorite.lon, 180.0);
            assert_eq!(favorite.color, Some(FavoriteColor::Yellow));
        }
        other => panic!("Expected a created favorite, got {:?}", other),
    }
}

#[tokio::test]
async fn an_omitted_color_comes_back_as_null() {
    // Arrange
    let test_api = spawn_api().await;
    let credential = assert_ok!(test_api.client().authenticate().await);
    let draft = FavoriteDraft::new("TestTitle", 50.0, 50.0);

    // Act
    let verdict = assert_ok!(
        test_api
            .runner
            .submit_and_validate(&credential, &draft)
            .await
    );

    // Assert
    assert!(matches!(verdict, Verdict::Created(favorite) if favorite.color.is_none()));
}

#[tokio::test]
async fn repeated_submissions_create_distinct_records() {
    // Arrange
    let test_api = spawn_api().await;
    let credential = assert_ok!(test_api.client().authenticate().await);
    let draft = FavoriteDraft::new("TestTitle", 50.0, 50.0);
    let mut ids = Vec::new();

    // Act
    for _ in 0..3 {
        let verdict = assert_ok!(
            test_api
                .runner
                .submit_and_validate(&credential, &draft)
                .await
        );
        if let Verdict::Created(favorite) = verdict {
            ids.push(favorite.id);
        }
    }

    // Assert
    assert_eq!(ids.len(), 3);
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]), "{:?}", ids);
}

#[tokio::test]
async fn free_text_titles_are_echoed() {
    // Arrange
    let test_api = spawn_api().await;
    let credential = assert_ok!(test_api.client().authenticate().await);
    let title: String = Sentence(1..8).fake();
    let draft = FavoriteDraft::new(title.clone(), 50.0, 50.0);

    // Act
    let verdict = assert_ok!(
        test_api
            .runner
            .submit_and_validate(&credential, &draft)
            .await
    );

    // Assert
    assert!(matches!(verdict, Verdict::Created(favorite) if favorite.title == title));
}

#[tokio::test]
async fn rejected_drafts_report_the_violated_rule() {
    // Arrange
    let test_api = spawn_api().await;
    let test_cases = vec![
        (
            FavoriteDraft::new("", 50.0, 50.0),
            ConstraintViolation::EmptyTitle,
        ),
        (
            FavoriteDraft::new("TestTitle", -90.000001, 50.0),
            ConstraintViolation::LatitudeTooLow,
        ),
        (
            FavoriteDraft::new("TestTitle", 50.0, 180.000001),
            ConstraintViolation::LongitudeTooHigh,
        ),
        (
            FavoriteDraft::new("TestTitle", 50.0, 50.0).with_color("#0000FF"),
            ConstraintViolation::UnknownColor,
        ),
    ];

    for (draft, violation) in test_cases {
        let credential = assert_ok!(test_api.client().authenticate().await);

        // Act
        let verdict = assert_ok!(
            test_api
                .runner
                .submit_and_validate(&credential, &draft)
                .await
        );

        // Assert
        assert_eq!(
            verdict,
            Verdict::Rejected(violation),
            "The draft {:?} was not rejected for {:?}",
            draft,
            violation
        );
    }
}
