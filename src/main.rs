#[macro_use]
extern crate rocket;

use blog_api::{create_rocket, db};

#[launch]
fn rocket() -> _ {
    let db_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| "data/posts.db".to_string());
    let conn = db::open(&db_url).expect("Failed to open database");
    create_rocket(conn)
}
