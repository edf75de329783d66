use crate::{
    db::{DbPool, OrmConn, orm_from_pool},
    upload::UploadStore,
};

#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub orm: OrmConn,
    pub uploads: UploadStore,
}

impl AppState {
    pub fn new(pool: DbPool, uploads: UploadStore) -> Self {
        let orm = orm_from_pool(&pool);
        Self { pool, orm, uploads }
    }
}
