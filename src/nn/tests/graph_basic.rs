use crate::assert_err;
use crate::nn::{Graph, GraphError, GraphInner};
use crate::tensor::Tensor;

#[test]
fn test_node_name_generation() {
    let mut graph = GraphInner::new();

    // 1. 显式命名
    let input = graph.new_input_node(&[2, 2], Some("input1")).unwrap();
    let tanh = graph.new_tanh_node(input, Some("explicit_tanh")).unwrap();
    assert_eq!(graph.get_node_name(tanh).unwrap(), "explicit_tanh");

    // 2. 自动命名
    let tanh2 = graph.new_tanh_node(input, None).unwrap();
    assert_eq!(graph.get_node_name(tanh2).unwrap(), "tanh_1");
    let softplus = graph.new_softplus_node(input, None).unwrap();
    assert_eq!(graph.get_node_name(softplus).unwrap(), "softplus_1");

    // 3. 名称重复
    let result = graph.new_tanh_node(input, Some("explicit_tanh"));
    assert_eq!(
        result,
        Err(GraphError::DuplicateNodeName(
            "节点explicit_tanh在图default_graph中重复".to_string()
        ))
    );
}

#[test]
fn test_node_edges() {
    let mut graph = GraphInner::new();
    let a = graph.new_input_node(&[2, 3], Some("a")).unwrap();
    let w = graph.new_parameter_node(&[3, 4], Some("w")).unwrap();
    let y = graph.new_mat_mul_node(a, w, None).unwrap();

    assert_eq!(graph.get_node_parents(y).unwrap(), vec![a, w]);
    assert_eq!(graph.get_node_children(a).unwrap(), vec![y]);
    assert_eq!(graph.get_node_value_expected_shape(y).unwrap(), &[2, 4]);
    assert_eq!(graph.nodes_count(), 3);
}

#[test]
fn test_set_value_on_computed_node() {
    let mut graph = GraphInner::new();
    let input = graph.new_input_node(&[2, 2], Some("input1")).unwrap();
    let tanh = graph.new_tanh_node(input, Some("tanh")).unwrap();

    let test_value = Tensor::new(&[1.0, 2.0, 3.0, 4.0], &[2, 2]);
    assert_eq!(
        graph.set_node_value(tanh, Some(&test_value)),
        Err(GraphError::InvalidOperation(
            "节点[id=2, name=tanh, type=Tanh]的值只能通过前向传播计算得到，不能直接设置".into()
        ))
    );
}

#[test]
fn test_set_value_shape_mismatch() {
    let mut graph = GraphInner::new();
    let input = graph.new_input_node(&[2, 2], Some("x")).unwrap();
    assert_err!(
        graph.set_node_value(input, Some(&Tensor::zeros(&[3, 2]))),
        GraphError::ShapeMismatch { expected, got, .. } if expected == &[2, 2] && got == &[3, 2]
    );
}

#[test]
fn test_invalid_shapes_at_construction() {
    let mut graph = GraphInner::new();
    let a = graph.new_input_node(&[2, 3], None).unwrap();
    let b = graph.new_input_node(&[2, 3], None).unwrap();
    let c = graph.new_input_node(&[4, 1], None).unwrap();

    // 1. 矩阵乘法内维不一致
    assert_err!(graph.new_mat_mul_node(a, b, None), GraphError::ShapeMismatch { .. });
    // 2. 无法广播
    assert_err!(graph.new_add_node(a, c, None), GraphError::ShapeMismatch { .. });
    // 3. 元素个数不同的 reshape
    assert_err!(graph.new_reshape_node(a, &[5], None), GraphError::ShapeMismatch { .. });
    // 4. 非法的维度排列
    assert_err!(graph.new_permute_node(a, &[0, 0], None), GraphError::InvalidOperation(_));
    // 5. 越界的求和维度
    assert_err!(graph.new_sum_axis_node(a, 2, None), GraphError::DimensionMismatch { .. });
    // 6. 参数必须是2维
    assert_err!(
        graph.new_parameter_node(&[3], None),
        GraphError::DimensionMismatch { expected: 2, got: 1, .. }
    );
}

#[test]
fn test_graph_handle_clone_shares_inner() {
    let graph = Graph::new();
    let cloned = graph.clone();
    let _ = graph.input_shape(&[1, 1], Some("x")).unwrap();
    assert_eq!(cloned.nodes_count(), 1);
}
