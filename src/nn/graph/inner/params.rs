/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : GraphInner 参数表：按作用域路径登记参数，支持跨子图共享
 */

use super::super::error::GraphError;
use super::GraphInner;
use crate::nn::scope::{path_has_prefix, Scope, ScopeMode};
use crate::nn::{Init, NodeId};

impl GraphInner {
    /// 在`scope`下取得名为`name`的参数
    ///
    /// - `Create` 模式：新建参数并按`init`初始化，路径已存在则报错
    /// - `Reuse` 模式：返回已登记的参数，不存在或形状不一致则报错
    pub fn get_or_create_parameter(
        &mut self,
        scope: &Scope,
        name: &str,
        shape: &[usize],
        init: &Init,
    ) -> Result<NodeId, GraphError> {
        let path = scope.param_path(name);
        match scope.mode() {
            ScopeMode::Reuse => {
                let id = self.lookup_parameter(&path).ok_or_else(|| {
                    GraphError::ScopeError(format!("复用模式下找不到参数{path}"))
                })?;
                let existing_shape = self.get_node(id)?.value_expected_shape();
                if existing_shape != shape {
                    return Err(GraphError::ScopeError(format!(
                        "复用参数{path}的形状不一致：已登记{existing_shape:?}，请求{shape:?}"
                    )));
                }
                Ok(id)
            }
            ScopeMode::Create => {
                if self.param_index.contains_key(&path) {
                    return Err(GraphError::ScopeError(format!(
                        "参数{path}已存在，如需共享请使用复用模式的作用域"
                    )));
                }
                let id = self.new_parameter_node(shape, Some(&path))?;
                let value = match self.rng.as_mut() {
                    Some(rng) => init.generate_with_rng(shape, rng),
                    None => init.generate_with_rng(shape, &mut rand::thread_rng()),
                };
                self.set_node_value(id, Some(&value))?;
                self.params.push((path.clone(), id));
                self.param_index.insert(path, id);
                Ok(id)
            }
        }
    }

    pub fn lookup_parameter(&self, path: &str) -> Option<NodeId> {
        self.param_index.get(path).copied()
    }

    /// 路径位于`prefix`之下的所有参数（按登记顺序）
    pub fn trainable_params_with_prefix(&self, prefix: &str) -> Vec<(String, NodeId)> {
        self.params
            .iter()
            .filter(|(path, _)| path_has_prefix(path, prefix))
            .cloned()
            .collect()
    }
}
