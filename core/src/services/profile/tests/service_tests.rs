//! ProfileService tests against hand-computed formula values.

use std::sync::Arc;

use crate::domain::entities::user::{Gender, Goal, ProfileUpdate};
use crate::errors::DomainError;
use crate::repositories::mock::MockUserRepository;
use crate::repositories::{NewUserRecord, UserRepository};
use crate::services::profile::{BmiCategory, ProfileService};

async fn service_with_user() -> (ProfileService<MockUserRepository>, i64) {
    let users = Arc::new(MockUserRepository::new());
    let user = users
        .create(NewUserRecord {
            name: "Julia".to_string(),
            email: "julia@example.com".to_string(),
            password_hash: "hash".to_string(),
        })
        .await
        .unwrap();
    (ProfileService::new(users), user.id)
}

#[tokio::test]
async fn update_profile_round_trips() {
    let (service, user_id) = service_with_user().await;

    let user = service
        .update_profile(
            user_id,
            ProfileUpdate {
                weight: Some(70.0),
                height: Some(175.0),
                age: Some(30),
                gender: Some(Gender::Male),
                activity_level: Some(1.55),
                goal: Some(Goal::Lose),
            },
        )
        .await
        .unwrap();

    assert_eq!(user.weight, Some(70.0));
    assert_eq!(user.goal, Goal::Lose);
}

#[tokio::test]
async fn bmi_matches_hand_computation() {
    let (service, user_id) = service_with_user().await;
    service
        .update_profile(
            user_id,
            ProfileUpdate {
                weight: Some(70.0),
                height: Some(175.0),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let result = service.body_mass_index(user_id).await.unwrap();

    // 70 / 1.75^2 = 22.857...
    assert!((result.bmi - 22.857142857142858).abs() < 1e-9);
    assert_eq!(result.category, BmiCategory::Normal);
}

#[tokio::test]
async fn bmi_categories_at_boundaries() {
    let cases = [
        (50.0, 175.0, BmiCategory::Underweight), // 16.3
        (80.0, 175.0, BmiCategory::Overweight),  // 26.1
        (95.0, 175.0, BmiCategory::Obese),       // 31.0
    ];

    for (weight, height, expected) in cases {
        let (service, user_id) = service_with_user().await;
        service
            .update_profile(
                user_id,
                ProfileUpdate {
                    weight: Some(weight),
                    height: Some(height),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let result = service.body_mass_index(user_id).await.unwrap();
        assert_eq!(result.category, expected, "weight={weight}");
    }
}

#[tokio::test]
async fn bmi_requires_weight_and_height() {
    let (service, user_id) = service_with_user().await;

    let err = service.body_mass_index(user_id).await.unwrap_err();
    assert!(matches!(err, DomainError::Validation { .. }));
}

#[tokio::test]
async fn calorie_target_matches_harris_benedict_male() {
    let (service, user_id) = service_with_user().await;
    service
        .update_profile(
            user_id,
            ProfileUpdate {
                weight: Some(70.0),
                height: Some(175.0),
                age: Some(30),
                gender: Some(Gender::Male),
                activity_level: Some(1.55),
                goal: Some(Goal::Lose),
            },
        )
        .await
        .unwrap();

    let target = service.calorie_target(user_id).await.unwrap();

    let bmr = 88.36 + 13.4 * 70.0 + 4.8 * 175.0 - 5.7 * 30.0;
    assert!((target.bmr - bmr).abs() < 1e-9);
    assert!((target.tdee - bmr * 1.55).abs() < 1e-9);
    assert!((target.goal_calories - bmr * 1.55 * 0.8).abs() < 1e-9);
    assert_eq!(target.goal, Goal::Lose);
}

#[tokio::test]
async fn calorie_target_matches_harris_benedict_female() {
    let (service, user_id) = service_with_user().await;
    service
        .update_profile(
            user_id,
            ProfileUpdate {
                weight: Some(60.0),
                height: Some(165.0),
                age: Some(25),
                gender: Some(Gender::Female),
                activity_level: Some(1.2),
                goal: Some(Goal::Gain),
            },
        )
        .await
        .unwrap();

    let target = service.calorie_target(user_id).await.unwrap();

    let bmr = 447.6 + 9.2 * 60.0 + 3.1 * 165.0 - 4.3 * 25.0;
    assert!((target.bmr - bmr).abs() < 1e-9);
    assert!((target.goal_calories - bmr * 1.2 * 1.15).abs() < 1e-9);
}

#[tokio::test]
async fn calorie_target_requires_full_profile() {
    let (service, user_id) = service_with_user().await;
    service
        .update_profile(
            user_id,
            ProfileUpdate {
                weight: Some(70.0),
                height: Some(175.0),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let err = service.calorie_target(user_id).await.unwrap_err();
    assert!(matches!(err, DomainError::Validation { .. }));
}

#[tokio::test]
async fn metrics_for_unknown_user_are_not_found() {
    let users = Arc::new(MockUserRepository::new());
    let service = ProfileService::new(users);

    let err = service.body_mass_index(404).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}
