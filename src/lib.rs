//! Family Tree Canvas Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod gateway;
pub mod photo;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, LoadStatus, UiState};
pub use core::{
    grid_cell, grid_position, CanvasBounds, DragState, GridCell, MemberId, MemberPatch,
    MemberRecord, NewMember, OwnerId,
};
pub use gateway::{
    AuthError, AuthGateway, Identity, InMemoryStore, JsonFileStore, LocalAuthGateway,
    MemberStore, StoreError,
};
pub use photo::{PhotoCapture, PhotoError, PhotoPayload};
pub use shared::{AppOptions, BubbleScene, BubbleView};
