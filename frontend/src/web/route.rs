//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义应用的所有路由、路径映射与访问门槛。

use campusqa_shared::Role;
use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 首页：公开的问题列表 (默认路由)
    #[default]
    Home,
    /// 登录页面
    Login,
    /// 注册页面
    Register,
    /// 问题详情
    QuestionDetail(u64),
    /// 分类浏览
    Categories,
    /// 搜索
    Search,
    /// 提问 (需要认证)
    AskQuestion,
    /// 个人资料 (需要认证)
    Profile,
    /// 收藏夹 (需要认证)
    Favorites,
    /// 管理后台 (需要认证 + admin 角色)
    Admin,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        let path = path.trim_end_matches('/');
        match path {
            "" => Self::Home,
            "/login" => Self::Login,
            "/register" => Self::Register,
            "/categories" => Self::Categories,
            "/search" => Self::Search,
            "/ask" => Self::AskQuestion,
            "/profile" => Self::Profile,
            "/favorites" => Self::Favorites,
            _ => {
                // 管理后台的所有子路径都由同一个 Admin 路由承载
                if path == "/admin" || path.starts_with("/admin/") {
                    return Self::Admin;
                }
                if let Some(rest) = path.strip_prefix("/questions/") {
                    if let Ok(id) = rest.parse::<u64>() {
                        return Self::QuestionDetail(id);
                    }
                }
                Self::NotFound
            }
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Login => "/login".to_string(),
            Self::Register => "/register".to_string(),
            Self::QuestionDetail(id) => format!("/questions/{}", id),
            Self::Categories => "/categories".to_string(),
            Self::Search => "/search".to_string(),
            Self::AskQuestion => "/ask".to_string(),
            Self::Profile => "/profile".to_string(),
            Self::Favorites => "/favorites".to_string(),
            Self::Admin => "/admin".to_string(),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Self::AskQuestion | Self::Profile | Self::Favorites | Self::Admin
        )
    }

    /// 角色受限路由允许的角色列表；空表示仅要求登录
    pub fn allowed_roles(&self) -> &'static [Role] {
        match self {
            Self::Admin => &[Role::Admin],
            _ => &[],
        }
    }

    /// 定义已认证用户是否应该离开此路由（如登录页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 获取角色不足时的重定向目标
    pub fn role_failure_redirect() -> Self {
        Self::Home
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_round_trip() {
        let routes = [
            AppRoute::Home,
            AppRoute::Login,
            AppRoute::Register,
            AppRoute::QuestionDetail(42),
            AppRoute::Categories,
            AppRoute::Search,
            AppRoute::AskQuestion,
            AppRoute::Profile,
            AppRoute::Favorites,
            AppRoute::Admin,
        ];
        for route in routes {
            assert_eq!(AppRoute::from_path(&route.to_path()), route);
        }
    }

    #[test]
    fn trailing_slash_is_tolerated() {
        assert_eq!(AppRoute::from_path("/login/"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/"), AppRoute::Home);
    }

    #[test]
    fn question_detail_requires_numeric_id() {
        assert_eq!(
            AppRoute::from_path("/questions/7"),
            AppRoute::QuestionDetail(7)
        );
        assert_eq!(AppRoute::from_path("/questions/abc"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/questions"), AppRoute::NotFound);
    }

    #[test]
    fn admin_subpaths_map_to_admin() {
        assert_eq!(AppRoute::from_path("/admin"), AppRoute::Admin);
        assert_eq!(AppRoute::from_path("/admin/users"), AppRoute::Admin);
        assert_eq!(AppRoute::from_path("/admin/reports/3"), AppRoute::Admin);
        assert_eq!(AppRoute::from_path("/administrator"), AppRoute::NotFound);
    }

    #[test]
    fn guard_requirements() {
        assert!(!AppRoute::Home.requires_auth());
        assert!(!AppRoute::QuestionDetail(1).requires_auth());
        assert!(AppRoute::AskQuestion.requires_auth());
        assert!(AppRoute::Profile.requires_auth());
        assert!(AppRoute::Favorites.requires_auth());
        assert!(AppRoute::Admin.requires_auth());
        assert_eq!(AppRoute::Admin.allowed_roles(), &[Role::Admin]);
        assert!(AppRoute::Profile.allowed_roles().is_empty());
    }

    #[test]
    fn unknown_path_is_not_found() {
        assert_eq!(AppRoute::from_path("/no-such-page"), AppRoute::NotFound);
    }
}
