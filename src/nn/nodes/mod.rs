/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : 计算图节点：NodeHandle 持有节点的公共状态（值、梯度、名称），
 *                 具体的前向/反向计算由 raw_node 中各节点类型实现
 */

mod node_handle;
pub(in crate::nn) mod raw_node;

pub(in crate::nn) use node_handle::NodeHandle;
pub use node_handle::NodeId;
