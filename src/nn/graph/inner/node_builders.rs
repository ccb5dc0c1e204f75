/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : GraphInner 节点构建方法（new_*_node）
 */

use super::super::error::GraphError;
use super::GraphInner;
use crate::nn::nodes::raw_node::{
    Abs, Add, Concat, Exp, Input, Ln, MatMul, Mean, MseLoss, NodeType, Parameter, Permute,
    Reshape, ScalarMultiply, Sigmoid, SoftPlus, Subtract, SumAxis, Tanh,
};
use crate::nn::nodes::NodeHandle;
use crate::nn::NodeId;

impl GraphInner {
    /// 添加节点到列表
    pub(in crate::nn::graph) fn add_node_to_list(
        &mut self,
        mut node_handle: NodeHandle,
        name: Option<&str>,
        parents: &[NodeId],
    ) -> Result<NodeId, GraphError> {
        let node_id = self.generate_valid_node_id();
        let node_name =
            self.generate_valid_new_node_name(name.unwrap_or(""), node_handle.type_name())?;

        for &parent_id in parents {
            self.forward_edges
                .entry(parent_id)
                .or_default()
                .push(node_id);
        }
        self.backward_edges
            .entry(node_id)
            .or_default()
            .extend(parents);

        node_handle.bind_id_and_name(node_id, &node_name);
        self.nodes.insert(node_id, node_handle);
        Ok(node_id)
    }

    /// 根据父节点的形状构造运算节点并加入图中
    fn new_op_node<T, F>(
        &mut self,
        parents: &[NodeId],
        name: Option<&str>,
        build: F,
    ) -> Result<NodeId, GraphError>
    where
        T: Into<NodeType>,
        F: FnOnce(&[&[usize]]) -> Result<T, GraphError>,
    {
        let raw_node = {
            let parent_shapes = parents
                .iter()
                .map(|&id| Ok(self.get_node(id)?.value_expected_shape()))
                .collect::<Result<Vec<&[usize]>, GraphError>>()?;
            build(&parent_shapes)?
        };
        self.add_node_to_list(NodeHandle::new(raw_node), name, parents)
    }

    // ========== 叶子节点 ==========

    /// 创建输入节点（placeholder），值需在运行前通过 set_value 喂入
    pub fn new_input_node(&mut self, shape: &[usize], name: Option<&str>) -> Result<NodeId, GraphError> {
        let node = NodeHandle::new(Input::new(shape)?);
        self.add_node_to_list(node, name, &[])
    }

    /// 创建参数节点（值由调用方随后设置）
    pub fn new_parameter_node(
        &mut self,
        shape: &[usize],
        name: Option<&str>,
    ) -> Result<NodeId, GraphError> {
        let node = NodeHandle::new(Parameter::new(shape)?);
        self.add_node_to_list(node, name, &[])
    }

    // ========== 算术 ==========

    pub fn new_add_node(&mut self, a: NodeId, b: NodeId, name: Option<&str>) -> Result<NodeId, GraphError> {
        self.new_op_node(&[a, b], name, Add::new)
    }

    pub fn new_subtract_node(
        &mut self,
        a: NodeId,
        b: NodeId,
        name: Option<&str>,
    ) -> Result<NodeId, GraphError> {
        self.new_op_node(&[a, b], name, Subtract::new)
    }

    pub fn new_mat_mul_node(
        &mut self,
        a: NodeId,
        b: NodeId,
        name: Option<&str>,
    ) -> Result<NodeId, GraphError> {
        self.new_op_node(&[a, b], name, MatMul::new)
    }

    pub fn new_scalar_multiply_node(
        &mut self,
        input: NodeId,
        scalar: f32,
        name: Option<&str>,
    ) -> Result<NodeId, GraphError> {
        self.new_op_node(&[input], name, |shapes| ScalarMultiply::new(shapes, scalar))
    }

    // ========== 逐元素函数 ==========

    pub fn new_tanh_node(&mut self, input: NodeId, name: Option<&str>) -> Result<NodeId, GraphError> {
        self.new_op_node(&[input], name, Tanh::new)
    }

    pub fn new_sigmoid_node(&mut self, input: NodeId, name: Option<&str>) -> Result<NodeId, GraphError> {
        self.new_op_node(&[input], name, Sigmoid::new)
    }

    pub fn new_softplus_node(&mut self, input: NodeId, name: Option<&str>) -> Result<NodeId, GraphError> {
        self.new_op_node(&[input], name, SoftPlus::new)
    }

    pub fn new_exp_node(&mut self, input: NodeId, name: Option<&str>) -> Result<NodeId, GraphError> {
        self.new_op_node(&[input], name, Exp::new)
    }

    pub fn new_ln_node(&mut self, input: NodeId, name: Option<&str>) -> Result<NodeId, GraphError> {
        self.new_op_node(&[input], name, Ln::new)
    }

    pub fn new_abs_node(&mut self, input: NodeId, name: Option<&str>) -> Result<NodeId, GraphError> {
        self.new_op_node(&[input], name, Abs::new)
    }

    // ========== 形状 ==========

    pub fn new_reshape_node(
        &mut self,
        input: NodeId,
        target_shape: &[usize],
        name: Option<&str>,
    ) -> Result<NodeId, GraphError> {
        self.new_op_node(&[input], name, |shapes| Reshape::new(shapes, target_shape))
    }

    pub fn new_permute_node(
        &mut self,
        input: NodeId,
        axes: &[usize],
        name: Option<&str>,
    ) -> Result<NodeId, GraphError> {
        self.new_op_node(&[input], name, |shapes| Permute::new(shapes, axes))
    }

    pub fn new_concat_node(
        &mut self,
        inputs: &[NodeId],
        axis: usize,
        name: Option<&str>,
    ) -> Result<NodeId, GraphError> {
        self.new_op_node(inputs, name, |shapes| Concat::new(shapes, axis))
    }

    // ========== 归约 ==========

    pub fn new_sum_axis_node(
        &mut self,
        input: NodeId,
        axis: usize,
        name: Option<&str>,
    ) -> Result<NodeId, GraphError> {
        self.new_op_node(&[input], name, |shapes| SumAxis::new(shapes, axis))
    }

    pub fn new_mean_node(&mut self, input: NodeId, name: Option<&str>) -> Result<NodeId, GraphError> {
        self.new_op_node(&[input], name, Mean::new)
    }

    // ========== 损失 ==========

    pub fn new_mse_loss_node(
        &mut self,
        prediction: NodeId,
        target: NodeId,
        name: Option<&str>,
    ) -> Result<NodeId, GraphError> {
        self.new_op_node(&[prediction, target], name, MseLoss::new)
    }
}
