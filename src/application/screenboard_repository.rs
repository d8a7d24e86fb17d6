// Repository trait for remote screenboard storage
use crate::domain::board::Board;
use crate::error::Result;
use async_trait::async_trait;

/// Identifier the remote service assigns to a stored board.
pub type ScreenboardId = i64;

#[async_trait]
pub trait ScreenboardRepository: Send + Sync {
    /// Store a new board and return its assigned id
    async fn create(&self, board: &Board) -> Result<ScreenboardId>;

    /// Replace the board stored under `id`; `NotFound` if there is none
    async fn update(&self, id: ScreenboardId, board: &Board) -> Result<()>;

    /// Remove the board stored under `id`. Removing a missing board succeeds.
    async fn delete(&self, id: ScreenboardId) -> Result<()>;

    /// Fetch the board stored under `id`; `NotFound` if there is none
    async fn get(&self, id: ScreenboardId) -> Result<Board>;

    /// Shareable URL that renders the board without authentication
    async fn public_url(&self, id: ScreenboardId) -> Result<String>;
}
