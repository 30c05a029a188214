//! Integration tests for the comment repository: author-scoped updates
//! and deletes, thread ordering, and reply cascades.

use commhub_db::models::comment::CreateComment;
use commhub_db::models::submission::CreateSubmission;
use commhub_db::repositories::{CommentRepo, SubmissionRepo};
use sqlx::PgPool;

fn new_submission(id: &str) -> CreateSubmission {
    CreateSubmission {
        id: id.to_string(),
        user_email: "volunteer@example.com".to_string(),
        file_name: format!("{id}.png"),
        file_type: "image".to_string(),
        file_size: 100,
        status: None,
        preview: None,
    }
}

fn new_comment(author: &str, text: &str, parent: Option<i64>) -> CreateComment {
    CreateComment {
        author_email: author.to_string(),
        author_type: "user".to_string(),
        text: text.to_string(),
        parent_comment_id: parent,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_thread_is_listed_in_insertion_order(pool: PgPool) {
    SubmissionRepo::create(&pool, &new_submission("c1")).await.unwrap();

    for text in ["first", "second", "third"] {
        CommentRepo::create(&pool, "c1", &new_comment("a@example.com", text, None))
            .await
            .unwrap();
    }

    let thread = CommentRepo::list_for_submission(&pool, "c1").await.unwrap();
    let texts: Vec<&str> = thread.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, ["first", "second", "third"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_by_stranger_returns_none_and_does_not_mutate(pool: PgPool) {
    SubmissionRepo::create(&pool, &new_submission("c2")).await.unwrap();
    let comment = CommentRepo::create(&pool, "c2", &new_comment("a@example.com", "original", None))
        .await
        .unwrap();

    let result = CommentRepo::update_text(&pool, comment.id, "b@example.com", "hijacked")
        .await
        .unwrap();
    assert!(result.is_none());

    let unchanged = CommentRepo::find_by_id(&pool, comment.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(unchanged.text, "original");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_by_author_succeeds(pool: PgPool) {
    SubmissionRepo::create(&pool, &new_submission("c3")).await.unwrap();
    let comment = CommentRepo::create(&pool, "c3", &new_comment("a@example.com", "draft", None))
        .await
        .unwrap();

    let updated = CommentRepo::update_text(&pool, comment.id, "a@example.com", "final")
        .await
        .unwrap()
        .expect("author should be able to update");
    assert_eq!(updated.text, "final");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_owned_is_author_scoped(pool: PgPool) {
    SubmissionRepo::create(&pool, &new_submission("c4")).await.unwrap();
    let comment = CommentRepo::create(&pool, "c4", &new_comment("a@example.com", "mine", None))
        .await
        .unwrap();

    assert!(!CommentRepo::delete_owned(&pool, comment.id, "b@example.com")
        .await
        .unwrap());
    assert!(CommentRepo::delete_owned(&pool, comment.id, "a@example.com")
        .await
        .unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleting_parent_cascades_replies(pool: PgPool) {
    SubmissionRepo::create(&pool, &new_submission("c5")).await.unwrap();
    let root = CommentRepo::create(&pool, "c5", &new_comment("a@example.com", "root", None))
        .await
        .unwrap();
    let reply = CommentRepo::create(
        &pool,
        "c5",
        &new_comment("b@example.com", "reply", Some(root.id)),
    )
    .await
    .unwrap();
    let nested = CommentRepo::create(
        &pool,
        "c5",
        &new_comment("a@example.com", "nested", Some(reply.id)),
    )
    .await
    .unwrap();

    assert!(CommentRepo::delete(&pool, root.id).await.unwrap());

    for id in [root.id, reply.id, nested.id] {
        assert!(CommentRepo::find_by_id(&pool, id).await.unwrap().is_none());
    }
}
