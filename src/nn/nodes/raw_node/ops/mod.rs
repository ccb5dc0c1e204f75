mod abs;
mod add;
mod concat;
mod exp;
mod ln;
mod mat_mul;
mod mean;
mod permute;
mod reshape;
mod scalar_multiply;
mod sigmoid;
mod softplus;
mod subtract;
mod sum_axis;
mod tanh;

pub(in crate::nn) use abs::Abs;
pub(in crate::nn) use add::Add;
pub(in crate::nn) use concat::Concat;
pub(in crate::nn) use exp::Exp;
pub(in crate::nn) use ln::Ln;
pub(in crate::nn) use mat_mul::MatMul;
pub(in crate::nn) use mean::Mean;
pub(in crate::nn) use permute::Permute;
pub(in crate::nn) use reshape::Reshape;
pub(in crate::nn) use scalar_multiply::ScalarMultiply;
pub(in crate::nn) use sigmoid::Sigmoid;
pub(in crate::nn) use softplus::SoftPlus;
pub(in crate::nn) use subtract::Subtract;
pub(in crate::nn) use sum_axis::SumAxis;
pub(in crate::nn) use tanh::Tanh;
