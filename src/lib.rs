pub mod activity;
pub mod api;
pub mod cli;
pub mod database;
pub mod database_factory;
pub mod date_provider;
pub mod error;
pub mod report;
pub mod row_factories;
pub mod seed;
pub mod statistics;
pub mod statistics_service;
