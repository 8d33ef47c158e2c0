//! 管理控制台库
//! 用户/角色列表的分页、搜索与删除，数据来自模拟后端

pub mod app;
pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod render;
pub mod services;
pub mod store;
pub mod telemetry;
