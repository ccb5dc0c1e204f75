/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : Graph 句柄（用户级 API）
 */

use super::error::GraphError;
use super::inner::GraphInner;
use crate::nn::scope::Scope;
use crate::nn::var::{Init, Var};
use crate::nn::NodeId;
use crate::tensor::Tensor;
use std::cell::RefCell;
use std::rc::Rc;

/// Graph - 计算图句柄
///
/// - 是 `Rc<RefCell<GraphInner>>` 的薄封装
/// - Clone 语义：多个 Graph 引用同一个 GraphInner
/// - 创建的 Var 自动持有图引用
#[derive(Clone)]
pub struct Graph {
    inner: Rc<RefCell<GraphInner>>,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    // ==================== 创建 ====================

    pub fn new() -> Self {
        Self::from_inner(GraphInner::new())
    }

    /// 创建带种子的图（参数初始化可重复）
    pub fn new_with_seed(seed: u64) -> Self {
        Self::from_inner(GraphInner::new_with_seed(seed))
    }

    pub fn from_inner(inner: GraphInner) -> Self {
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    pub(crate) const fn from_rc(inner: Rc<RefCell<GraphInner>>) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> std::cell::Ref<'_, GraphInner> {
        self.inner.borrow()
    }

    pub(crate) fn inner_rc(&self) -> Rc<RefCell<GraphInner>> {
        Rc::clone(&self.inner)
    }

    /// 将 NodeId 包装成 Var
    pub fn wrap_node_id(&self, node_id: NodeId) -> Var {
        Var::new(node_id, Rc::clone(&self.inner))
    }

    // ==================== 创建变量 ====================

    /// 创建带形状的输入节点（placeholder），每次运行前用 `set_value` 喂数据
    pub fn input_shape(&self, shape: &[usize], name: Option<&str>) -> Result<Var, GraphError> {
        let node_id = self.inner.borrow_mut().new_input_node(shape, name)?;
        Ok(self.wrap_node_id(node_id))
    }

    /// 创建输入节点并设置数据
    pub fn input(&self, data: &Tensor) -> Result<Var, GraphError> {
        let mut g = self.inner.borrow_mut();
        let node_id = g.new_input_node(data.shape(), None)?;
        g.set_node_value(node_id, Some(data))?;
        Ok(Var::new(node_id, Rc::clone(&self.inner)))
    }

    /// 常量节点：值固定、不接收梯度（如损失中的`1 - D(G(z))`里的全1张量）
    pub fn constant(&self, value: &Tensor) -> Result<Var, GraphError> {
        self.input(value)
    }

    /// 在作用域`scope`下创建或复用名为`name`的参数
    ///
    /// 作用域为复用模式时，`init`被忽略。
    pub fn variable(
        &self,
        scope: &Scope,
        name: &str,
        shape: &[usize],
        init: Init,
    ) -> Result<Var, GraphError> {
        let node_id = self
            .inner
            .borrow_mut()
            .get_or_create_parameter(scope, name, shape, &init)?;
        Ok(self.wrap_node_id(node_id))
    }

    /// 作用域路径以`prefix`开头的所有参数（按创建顺序）
    pub fn trainable_vars(&self, prefix: &str) -> Vec<Var> {
        self.inner
            .borrow()
            .trainable_params_with_prefix(prefix)
            .into_iter()
            .map(|(_, id)| self.wrap_node_id(id))
            .collect()
    }

    /// 作用域路径以`prefix`开头的所有参数的路径（按创建顺序）
    pub fn trainable_var_paths(&self, prefix: &str) -> Vec<String> {
        self.inner
            .borrow()
            .trainable_params_with_prefix(prefix)
            .into_iter()
            .map(|(path, _)| path)
            .collect()
    }

    // ==================== 执行 ====================

    pub fn forward(&self, output: &Var) -> Result<(), GraphError> {
        self.inner.borrow_mut().forward(output.node_id())
    }

    pub fn nodes_count(&self) -> usize {
        self.inner.borrow().nodes_count()
    }
}
