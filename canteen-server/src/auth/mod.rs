//! 认证授权模块
//!
//! 两层防护：
//! - 访问链接 (`{link}` 路径段) 不匹配时返回 404，见 [`require_employee_link`]
//! - 会话令牌携带角色与员工姓名，见 [`require_employee_session`]
//!
//! - [`JwtService`] - JWT 令牌服务
//! - [`CurrentSession`] - 当前会话上下文

pub mod extractor;
pub mod jwt;
pub mod middleware;

pub use jwt::{Claims, CurrentSession, JwtConfig, JwtError, JwtService, SessionRole};
pub use middleware::{
    link_matches, require_employee_link, require_employee_session, require_kitchen_link,
    require_kitchen_session,
};
