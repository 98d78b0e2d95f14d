//! Order Engine - 餐厅点餐配置后端核心
//!
//! Validation and atomic-commit engine for configurable dish orders: a
//! customer assembles a dish from a base, a size and a set of ingredients;
//! the engine decides whether the combination is legal (existence, stock,
//! size cap, dependencies, incompatibilities) and commits accepted orders
//! in one transaction that also reserves ingredient stock.
//!
//! # 模块结构
//!
//! ```text
//! order-engine/src/
//! ├── core/          # 配置
//! ├── db/            # SQLite 连接池、迁移、仓储层
//! │   └── repository # catalog / inventory / order
//! ├── orders/        # 校验、金额、事务管理器
//! └── utils/         # 日志、输入校验
//! ```
//!
//! HTTP routing, sessions and catalog CRUD endpoints live in the calling
//! service; this crate only exposes the engine and its stores.

pub mod core;
pub mod db;
pub mod orders;
pub mod utils;

// Re-export 公共类型
pub use core::Config;
pub use db::DbService;
pub use orders::{OrderError, OrderManager};
pub use shared::order::{DeleteOutcome, OrderReceipt, Violation};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
