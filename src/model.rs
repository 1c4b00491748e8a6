use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

/// Transfer representation of a stored blog post.
#[derive(Debug, Clone, Serialize)]
pub struct BlogPost {
    pub id: String,
    pub author: String,
    pub title: String,
    pub content: String,
    pub created: String,
}

/// Fields accepted when creating a post. `created` falls back to the
/// insertion time when absent.
#[derive(Debug, Clone, Deserialize)]
pub struct NewPost {
    pub author: String,
    pub title: String,
    pub content: String,
    pub created: Option<String>,
}

/// Partial update; only supplied fields change. An `id` in the body is
/// ignored, the path id is authoritative.
#[derive(Debug, Default, Deserialize)]
pub struct PostPatch {
    pub author: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
}

fn row_to_post(row: &rusqlite::Row<'_>) -> rusqlite::Result<BlogPost> {
    Ok(BlogPost {
        id: row.get(0)?,
        author: row.get(1)?,
        title: row.get(2)?,
        content: row.get(3)?,
        created: row.get(4)?,
    })
}

pub fn insert(conn: &Connection, record: &NewPost) -> rusqlite::Result<BlogPost> {
    let id = uuid::Uuid::new_v4().to_string();
    let created = record
        .created
        .clone()
        .unwrap_or_else(|| Utc::now().to_rfc3339());

    conn.execute(
        "INSERT INTO posts (id, author, title, content, created) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![id, record.author, record.title, record.content, created],
    )?;

    Ok(BlogPost {
        id,
        author: record.author.clone(),
        title: record.title.clone(),
        content: record.content.clone(),
        created,
    })
}

pub fn insert_many(conn: &Connection, records: &[NewPost]) -> rusqlite::Result<Vec<BlogPost>> {
    let mut inserted = Vec::with_capacity(records.len());
    for record in records {
        inserted.push(insert(conn, record)?);
    }
    Ok(inserted)
}

pub fn find_all(conn: &Connection) -> rusqlite::Result<Vec<BlogPost>> {
    let mut stmt = conn.prepare(
        "SELECT id, author, title, content, created FROM posts ORDER BY created DESC",
    )?;
    let posts = stmt
        .query_map([], row_to_post)?
        .filter_map(|r| r.ok())
        .collect();
    Ok(posts)
}

pub fn find_by_id(conn: &Connection, id: &str) -> rusqlite::Result<Option<BlogPost>> {
    conn.query_row(
        "SELECT id, author, title, content, created FROM posts WHERE id = ?1",
        [id],
        row_to_post,
    )
    .optional()
}

/// Returns an arbitrary single document, if any exist.
pub fn find_one(conn: &Connection) -> rusqlite::Result<Option<BlogPost>> {
    conn.query_row(
        "SELECT id, author, title, content, created FROM posts LIMIT 1",
        [],
        row_to_post,
    )
    .optional()
}

pub fn count(conn: &Connection) -> rusqlite::Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM posts", [], |row| row.get(0))
}

/// Updates only the supplied fields; returns `false` when the id is absent.
pub fn update_by_id(conn: &Connection, id: &str, patch: &PostPatch) -> rusqlite::Result<bool> {
    let current = match find_by_id(conn, id)? {
        Some(post) => post,
        None => return Ok(false),
    };

    let author = patch.author.as_deref().unwrap_or(&current.author);
    let title = patch.title.as_deref().unwrap_or(&current.title);
    let content = patch.content.as_deref().unwrap_or(&current.content);

    conn.execute(
        "UPDATE posts SET author = ?1, title = ?2, content = ?3 WHERE id = ?4",
        params![author, title, content, id],
    )?;
    Ok(true)
}

/// Returns `false` when the id is absent.
pub fn delete_by_id(conn: &Connection, id: &str) -> rusqlite::Result<bool> {
    let deleted = conn.execute("DELETE FROM posts WHERE id = ?1", [id])?;
    Ok(deleted > 0)
}
