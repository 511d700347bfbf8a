//! Database-backed integration tests.
//!
//! These exercise the store against a real PostgreSQL instance. Run with:
//!
//! ```text
//! DATABASE_URL=postgres://... cargo test -p stackit-store --features integration-tests
//! ```

#![cfg(feature = "integration-tests")]

use rand::Rng;

use stackit_core::VoteDirection;
use stackit_store::{
    NewAnswer, NewNotification, NewQuestion, NewUser, Store, StoreConfig, StoreError, UserRow,
    VoteOutcome,
};

async fn connect() -> Store {
    let config = StoreConfig::from_env().expect("DATABASE_URL must be set for integration tests");
    Store::connect(config).await.expect("database connection")
}

fn unique_email(prefix: &str) -> String {
    let n: u64 = rand::thread_rng().r#gen();
    format!("{}-{:016x}@example.com", prefix, n)
}

async fn make_user(store: &Store, name: &str) -> UserRow {
    store
        .insert_user(&NewUser::new(
            name.to_string(),
            unique_email(name),
            "argon2-test-hash".to_string(),
        ))
        .await
        .unwrap()
}

async fn make_question(store: &Store, owner: &UserRow) -> stackit_store::QuestionRow {
    store
        .insert_question(&NewQuestion::new(
            "How do I test a store?".to_string(),
            "With a real database.".to_string(),
            vec!["testing".to_string()],
            owner.id,
        ))
        .await
        .unwrap()
}

#[tokio::test]
async fn toggle_off_restores_prior_score() {
    let store = connect().await;
    let asker = make_user(&store, "asker").await;
    let answerer = make_user(&store, "answerer").await;
    let voter = make_user(&store, "voter").await;

    let question = make_question(&store, &asker).await;
    let answer = store
        .insert_answer(&NewAnswer::new(
            question.id,
            answerer.id,
            "Like this.".to_string(),
        ))
        .await
        .unwrap();

    // up -> +1, up again -> back to 0, down -> -1 (the worked example)
    let (outcome, score) = store
        .toggle_vote(voter.id, answer.id, VoteDirection::Up)
        .await
        .unwrap();
    assert_eq!(outcome, VoteOutcome::Added);
    assert_eq!(score, 1);

    let (outcome, score) = store
        .toggle_vote(voter.id, answer.id, VoteDirection::Up)
        .await
        .unwrap();
    assert_eq!(outcome, VoteOutcome::Removed);
    assert_eq!(score, 0);
    assert!(store.get_vote(voter.id, answer.id).await.unwrap().is_none());

    let (outcome, score) = store
        .toggle_vote(voter.id, answer.id, VoteDirection::Down)
        .await
        .unwrap();
    assert_eq!(outcome, VoteOutcome::Added);
    assert_eq!(score, -1);
}

#[tokio::test]
async fn opposite_directions_keep_single_row() {
    let store = connect().await;
    let asker = make_user(&store, "asker").await;
    let voter = make_user(&store, "voter").await;

    let question = make_question(&store, &asker).await;
    let answer = store
        .insert_answer(&NewAnswer::new(
            question.id,
            asker.id,
            "Self answer.".to_string(),
        ))
        .await
        .unwrap();

    let (outcome, _) = store
        .toggle_vote(voter.id, answer.id, VoteDirection::Up)
        .await
        .unwrap();
    assert_eq!(outcome, VoteOutcome::Added);

    let (outcome, score) = store
        .toggle_vote(voter.id, answer.id, VoteDirection::Down)
        .await
        .unwrap();
    assert_eq!(outcome, VoteOutcome::Updated);
    assert_eq!(score, -1);

    let vote = store
        .get_vote(voter.id, answer.id)
        .await
        .unwrap()
        .expect("exactly one row remains");
    assert_eq!(vote.direction_parsed(), Some(VoteDirection::Down));

    let details = store.list_answers_for_question(question.id).await.unwrap();
    let detail = details.iter().find(|a| a.id == answer.id).unwrap();
    assert_eq!(detail.upvotes, 0);
    assert_eq!(detail.downvotes, 1);
}

#[tokio::test]
async fn accept_requires_question_owner() {
    let store = connect().await;
    let owner = make_user(&store, "owner").await;
    let answerer = make_user(&store, "answerer").await;
    let stranger = make_user(&store, "stranger").await;

    let question = make_question(&store, &owner).await;
    let answer = store
        .insert_answer(&NewAnswer::new(
            question.id,
            answerer.id,
            "Accept me.".to_string(),
        ))
        .await
        .unwrap();

    let err = store.accept_answer(answer.id, stranger.id).await.unwrap_err();
    assert!(matches!(err, StoreError::NotQuestionOwner { .. }));
    assert!(!store.get_answer(answer.id).await.unwrap().is_accepted);

    let accepted = store.accept_answer(answer.id, owner.id).await.unwrap();
    assert!(accepted.is_accepted);
}

#[tokio::test]
async fn mark_all_read_scoped_to_user() {
    let store = connect().await;
    let alice = make_user(&store, "alice").await;
    let bob = make_user(&store, "bob").await;

    for user in [&alice, &bob] {
        store
            .insert_notification(&NewNotification::new(
                user.id,
                "Someone answered your question".to_string(),
            ))
            .await
            .unwrap();
    }

    assert_eq!(store.unread_notification_count(bob.id).await.unwrap(), 1);

    let updated = store.mark_notifications_read(alice.id).await.unwrap();
    assert_eq!(updated, 1);

    assert_eq!(store.unread_notification_count(alice.id).await.unwrap(), 0);
    // Bob's unread count is untouched.
    assert_eq!(store.unread_notification_count(bob.id).await.unwrap(), 1);
}

#[tokio::test]
async fn duplicate_email_rejected() {
    let store = connect().await;
    let email = unique_email("dup");

    store
        .insert_user(&NewUser::new(
            "First".to_string(),
            email.clone(),
            "hash".to_string(),
        ))
        .await
        .unwrap();

    let err = store
        .insert_user(&NewUser::new(
            "Second".to_string(),
            email.clone(),
            "hash".to_string(),
        ))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::DuplicateEmail(e) if e == email));
}

#[tokio::test]
async fn tag_filter_matches_exactly() {
    let store = connect().await;
    let asker = make_user(&store, "asker").await;

    // A tag nobody else uses, so the filter returns exactly our question.
    let tag = format!("tag-{:016x}", rand::thread_rng().gen::<u64>());
    let question = store
        .insert_question(&NewQuestion::new(
            "Tagged question".to_string(),
            "Body".to_string(),
            vec![tag.clone(), "testing".to_string()],
            asker.id,
        ))
        .await
        .unwrap();

    let listed = store.list_questions(Some(&tag)).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, question.id);
    assert_eq!(listed[0].author_name, "asker");
    assert_eq!(listed[0].answer_count, 0);
}
