mod mse_loss;

pub(in crate::nn) use mse_loss::MseLoss;
