/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : 参数作用域：用`/`分隔的层级路径给参数命名，
 *                 并决定在该作用域下是新建参数还是复用已登记的同名参数
 */

/// 作用域模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeMode {
    /// 新建参数；路径已存在时报错
    Create,
    /// 复用已登记的参数；路径不存在或形状不一致时报错
    Reuse,
}

/// 参数作用域，如 `Disc/discriminator/l1`
///
/// 子作用域继承父作用域的模式，因此对外层作用域调用 [`Scope::reuse`]
/// 后，内部所有层都会复用同名参数。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    path: String,
    mode: ScopeMode,
}

impl Scope {
    pub fn new(name: &str) -> Self {
        Self {
            path: name.to_string(),
            mode: ScopeMode::Create,
        }
    }

    pub fn child(&self, name: &str) -> Self {
        let path = if self.path.is_empty() {
            name.to_string()
        } else {
            format!("{}/{name}", self.path)
        };
        Self {
            path,
            mode: self.mode,
        }
    }

    /// 返回同一路径、但处于复用模式的作用域
    pub fn reuse(&self) -> Self {
        Self {
            path: self.path.clone(),
            mode: ScopeMode::Reuse,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub const fn mode(&self) -> ScopeMode {
        self.mode
    }

    pub const fn is_reuse(&self) -> bool {
        matches!(self.mode, ScopeMode::Reuse)
    }

    /// 本作用域下名为`name`的参数的完整路径
    pub fn param_path(&self, name: &str) -> String {
        self.child(name).path
    }
}

/// `path`是否位于作用域前缀`prefix`之下（空前缀匹配全部）
pub(crate) fn path_has_prefix(path: &str, prefix: &str) -> bool {
    if prefix.is_empty() || path == prefix {
        return true;
    }
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.starts_with('/'))
}
