/// 学习率调度
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LearningRateSchedule {
    Constant(f32),
    /// `lr = init_lr * decay_rate ^ (step / decay_steps)`，
    /// `staircase`为真时指数取整（每`decay_steps`步衰减一次）
    ExponentialDecay {
        init_lr: f32,
        decay_rate: f32,
        decay_steps: u64,
        staircase: bool,
    },
}

impl LearningRateSchedule {
    pub fn learning_rate_at(&self, step: u64) -> f32 {
        match *self {
            Self::Constant(lr) => lr,
            Self::ExponentialDecay {
                init_lr,
                decay_rate,
                decay_steps,
                staircase,
            } => {
                if decay_steps == 0 {
                    return init_lr;
                }
                let exponent = if staircase {
                    (step / decay_steps) as f32
                } else {
                    step as f32 / decay_steps as f32
                };
                init_lr * decay_rate.powf(exponent)
            }
        }
    }
}
