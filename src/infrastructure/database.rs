// src/infrastructure/database.rs
use mongodb::{
    Client, Database, IndexModel,
    bson::{Document, doc},
    options::{ClientOptions, IndexOptions},
};
use tracing::info;

pub const ATTORNEYS: &str = "attorneys";
pub const BLOG_POSTS: &str = "blogposts";
pub const CATEGORIES: &str = "categories";
pub const SERVICES: &str = "services";
pub const LEGAL_CONTENTS: &str = "legalcontents";

/// Connect and ping so a bad URI fails at startup rather than on the first
/// request. The returned handle is pooled and cheap to clone.
pub async fn connect(uri: &str, db_name: &str) -> Result<Database, mongodb::error::Error> {
    let mut options = ClientOptions::parse(uri).await?;
    options.app_name = Some("altum-legal".into());
    let client = Client::with_options(options)?;
    let db = client.database(db_name);
    db.run_command(doc! { "ping": 1 }).await?;
    info!(database = db_name, "connected to mongodb");
    Ok(db)
}

fn unique(keys: Document, sparse: bool) -> IndexModel {
    IndexModel::builder()
        .keys(keys)
        .options(IndexOptions::builder().unique(true).sparse(sparse).build())
        .build()
}

fn plain(keys: Document) -> IndexModel {
    IndexModel::builder().keys(keys).build()
}

pub async fn ensure_indexes(db: &Database) -> Result<(), mongodb::error::Error> {
    let attorneys = db.collection::<Document>(ATTORNEYS);
    attorneys.create_index(unique(doc! { "slug": 1 }, true)).await?;
    attorneys.create_index(unique(doc! { "correo": 1 }, false)).await?;
    attorneys.create_index(plain(doc! { "activo": 1, "esSocio": -1 })).await?;

    let posts = db.collection::<Document>(BLOG_POSTS);
    posts.create_index(unique(doc! { "slug": 1 }, false)).await?;
    posts.create_index(plain(doc! { "status": 1, "publishedAt": -1 })).await?;
    posts.create_index(plain(doc! { "tags": 1 })).await?;

    db.collection::<Document>(CATEGORIES)
        .create_index(unique(doc! { "slug": 1 }, false))
        .await?;
    db.collection::<Document>(SERVICES)
        .create_index(unique(doc! { "slug": 1 }, false))
        .await?;
    db.collection::<Document>(LEGAL_CONTENTS)
        .create_index(unique(doc! { "key": 1 }, false))
        .await?;

    info!("mongodb indexes ensured");
    Ok(())
}
