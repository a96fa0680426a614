//! tabsplit infrastructure: file-backed persistence collaborators.

pub mod config_service;
pub mod dto;
pub mod json_participant_repository;
pub mod paths;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::json_participant_repository::JsonParticipantRepository;
