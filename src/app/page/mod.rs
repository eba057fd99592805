//! 商品详情页：骨架、界面状态、片段与渲染

pub mod fragments;
pub mod handler;
pub mod labels;
pub mod model;
pub mod service;
pub mod shell;
pub mod state;
