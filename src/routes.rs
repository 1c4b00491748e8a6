use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::State;
use serde::Serialize;

use crate::model::{self, BlogPost, NewPost, PostPatch};
use crate::{DbPool, DbPoolExt};

// ─── Errors ───

#[derive(Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

fn err(status: Status, msg: &str, code: &str) -> (Status, Json<ApiError>) {
    (status, Json(ApiError { error: msg.to_string(), code: code.to_string() }))
}

fn db_err(msg: &str) -> (Status, Json<ApiError>) {
    err(Status::InternalServerError, msg, "DB_ERROR")
}

// ─── Routes ───

#[get("/health")]
pub fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok", "version": env!("CARGO_PKG_VERSION")}))
}

#[get("/posts")]
pub fn list_posts(db: &State<DbPool>) -> Result<Json<Vec<BlogPost>>, (Status, Json<ApiError>)> {
    let conn = db.conn();
    let posts = model::find_all(&conn).map_err(|e| db_err(&e.to_string()))?;
    Ok(Json(posts))
}

#[get("/posts/<post_id>")]
pub fn get_post(post_id: &str, db: &State<DbPool>) -> Result<Json<BlogPost>, (Status, Json<ApiError>)> {
    let conn = db.conn();
    model::find_by_id(&conn, post_id)
        .map_err(|e| db_err(&e.to_string()))?
        .map(Json)
        .ok_or_else(|| err(Status::NotFound, "Post not found", "NOT_FOUND"))
}

#[post("/posts", format = "json", data = "<req>")]
pub fn create_post(req: Json<NewPost>, db: &State<DbPool>) -> Result<(Status, Json<BlogPost>), (Status, Json<ApiError>)> {
    let record = req.into_inner();
    if record.author.trim().is_empty()
        || record.title.trim().is_empty()
        || record.content.trim().is_empty()
    {
        return Err(err(Status::UnprocessableEntity, "Author, title and content are required", "VALIDATION_ERROR"));
    }

    let conn = db.conn();
    let post = model::insert(&conn, &record).map_err(|e| db_err(&e.to_string()))?;
    Ok((Status::Created, Json(post)))
}

#[put("/posts/<post_id>", format = "json", data = "<req>")]
pub fn update_post(post_id: &str, req: Json<PostPatch>, db: &State<DbPool>) -> Result<Status, (Status, Json<ApiError>)> {
    let conn = db.conn();
    let updated = model::update_by_id(&conn, post_id, &req).map_err(|e| db_err(&e.to_string()))?;
    if !updated {
        return Err(err(Status::NotFound, "Post not found", "NOT_FOUND"));
    }
    Ok(Status::NoContent)
}

#[delete("/posts/<post_id>")]
pub fn delete_post(post_id: &str, db: &State<DbPool>) -> Result<Status, (Status, Json<ApiError>)> {
    let conn = db.conn();
    let deleted = model::delete_by_id(&conn, post_id).map_err(|e| db_err(&e.to_string()))?;
    if !deleted {
        return Err(err(Status::NotFound, "Post not found", "NOT_FOUND"));
    }
    Ok(Status::NoContent)
}

// ─── Catchers ───

#[catch(404)]
pub fn not_found() -> Json<ApiError> {
    Json(ApiError { error: "Not found".to_string(), code: "NOT_FOUND".to_string() })
}

#[catch(422)]
pub fn unprocessable() -> Json<ApiError> {
    Json(ApiError { error: "Invalid request body".to_string(), code: "VALIDATION_ERROR".to_string() })
}

#[catch(500)]
pub fn internal_error() -> Json<ApiError> {
    Json(ApiError { error: "Internal server error".to_string(), code: "INTERNAL_ERROR".to_string() })
}
