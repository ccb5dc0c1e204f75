/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : GAN 训练流程
 *
 * 阶段：Uninitialized -> Pretraining -> WeightTransfer -> Alternating(step) -> Rendering -> Done
 */

use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info};

use super::model::{discriminator, generator};
use super::snapshot::{Snapshot, SNAPSHOT_NUM_BINS, SNAPSHOT_NUM_POINTS};
use super::{GanConfig, GanError};
use crate::distribution::{histogram_density, linspace, DataDistribution, GeneratorDistribution};
use crate::nn::{
    optimizer, Graph, GraphError, Optimizer, Scope, Var, VarActivationOps, VarLossOps,
    VarReduceOps, SGD,
};
use crate::tensor::Tensor;
use crate::vision::Vision;

/// 预训练输入`(U[0,1) - 0.5) * PRETRAIN_INPUT_SPAN`，即[-5, 5)上的均匀分布
const PRETRAIN_INPUT_SPAN: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainingPhase {
    Uninitialized,
    Pretraining,
    WeightTransfer,
    Alternating(usize),
    Rendering,
    Done,
}

/// 交替训练中某一步的两个损失（均为更新前的值）
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StepLosses {
    pub step: usize,
    pub loss_d: f32,
    pub loss_g: f32,
}

/// 整个训练过程的结果
#[derive(Debug, Clone, Serialize)]
pub struct TrainingReport {
    pub pre_loss_vals: Vec<f32>,
    pub history: Vec<StepLosses>,
    /// 静态图所用的快照，或动画的最后一帧
    pub final_snapshot: Option<Snapshot>,
    /// 实际写出的图片/动图路径
    pub output_path: PathBuf,
}

/// 一维 GAN 的训练器，持有整个计算图
pub struct Gan {
    config: GanConfig,
    data: DataDistribution,
    gen: GeneratorDistribution,
    graph: Graph,
    rng: StdRng,
    learning_rate: f32,
    phase: TrainingPhase,

    // ========== 预训练判别器 D_pre ==========
    pre_input: Var,
    pre_labels: Var,
    d_pre: Var,
    pre_loss: Var,
    pre_opt: SGD,

    // ========== 生成器 Gen ==========
    z: Var,
    g: Var,

    // ========== 判别器 Disc（真实/生成两个分支共享参数）==========
    x: Var,
    d_data: Var,

    loss_d: Var,
    loss_g: Var,
    d_pre_params: Vec<Var>,
    d_params: Vec<Var>,
    g_params: Vec<Var>,
    opt_d: SGD,
    opt_g: SGD,

    // ========== 训练记录 ==========
    weights_d: Vec<Tensor>,
    pre_loss_vals: Vec<f32>,
    history: Vec<StepLosses>,
    anim_frames: Vec<Snapshot>,
}

impl Gan {
    /// 构建全部网络、损失与优化器
    pub fn new(config: GanConfig) -> Result<Self, GanError> {
        if config.batch_size == 0 {
            return Err(GanError::Config("batch_size 必须大于0".to_string()));
        }
        if config.hidden_dim == 0 {
            return Err(GanError::Config("hidden_dim 必须大于0".to_string()));
        }
        let data = DataDistribution::new(config.real_mean, config.real_stddev)?;
        let gen = GeneratorDistribution::new(config.noise_range);
        let graph = Graph::new_with_seed(config.seed);
        let rng = StdRng::seed_from_u64(config.seed);
        let learning_rate = config.learning_rate();
        let batch = config.batch_size;
        let hidden_dim = config.hidden_dim;
        let use_minibatch = config.use_minibatch_discrimination;

        // 预训练判别器：拟合真实分布的概率密度
        let pre_scope = Scope::new("D_pre");
        let pre_input = graph.input_shape(&[batch, 1], Some("D_pre/pre_input"))?;
        let pre_labels = graph.input_shape(&[batch, 1], Some("D_pre/pre_labels"))?;
        let d_pre = discriminator(&pre_input, &pre_scope, hidden_dim, use_minibatch)?;
        let pre_loss = d_pre.mse_loss(&pre_labels)?;
        // 此时图中只有 D_pre 的参数
        let pre_opt = optimizer(&graph, None, learning_rate);

        let gen_scope = Scope::new("Gen");
        let z = graph.input_shape(&[batch, 1], Some("Gen/z"))?;
        let g = generator(&z, &gen_scope, hidden_dim)?;

        // 两个分支：D(x) 新建参数，D(G(z)) 复用同一组参数
        let disc_scope = Scope::new("Disc");
        let x = graph.input_shape(&[batch, 1], Some("Disc/x"))?;
        let d_data = discriminator(&x, &disc_scope, hidden_dim, use_minibatch)?;
        let d_gen = discriminator(&g, &disc_scope.reuse(), hidden_dim, use_minibatch)?;

        // loss_d = mean(-ln D(x) - ln(1 - D(G(z))))，loss_g = mean(-ln D(G(z)))
        let ones = graph.constant(&Tensor::ones(&[batch, 1]))?;
        let loss_d = d_data
            .ln()?
            .try_add(&ones.try_sub(&d_gen)?.ln()?)?
            .neg()?
            .mean()?;
        let loss_g = d_gen.ln()?.neg()?.mean()?;

        let d_pre_params = graph.trainable_vars("D_pre");
        let d_params = graph.trainable_vars("Disc");
        let g_params = graph.trainable_vars("Gen");
        let opt_d = optimizer(&graph, Some(d_params.clone()), learning_rate);
        let opt_g = optimizer(&graph, Some(g_params.clone()), learning_rate);

        debug!(
            nodes = graph.nodes_count(),
            d_pre_params = d_pre_params.len(),
            d_params = d_params.len(),
            g_params = g_params.len(),
            learning_rate,
            "计算图构建完成"
        );

        Ok(Self {
            config,
            data,
            gen,
            graph,
            rng,
            learning_rate,
            phase: TrainingPhase::Uninitialized,
            pre_input,
            pre_labels,
            d_pre,
            pre_loss,
            pre_opt,
            z,
            g,
            x,
            d_data,
            loss_d,
            loss_g,
            d_pre_params,
            d_params,
            g_params,
            opt_d,
            opt_g,
            weights_d: Vec::new(),
            pre_loss_vals: Vec::new(),
            history: Vec::new(),
            anim_frames: Vec::new(),
        })
    }

    // ========== 访问器 ==========

    pub const fn config(&self) -> &GanConfig {
        &self.config
    }

    pub const fn phase(&self) -> TrainingPhase {
        self.phase
    }

    pub const fn learning_rate(&self) -> f32 {
        self.learning_rate
    }

    pub const fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn pre_loss_vals(&self) -> &[f32] {
        &self.pre_loss_vals
    }

    pub fn history(&self) -> &[StepLosses] {
        &self.history
    }

    pub fn anim_frames(&self) -> &[Snapshot] {
        &self.anim_frames
    }

    pub fn d_pre_params(&self) -> &[Var] {
        &self.d_pre_params
    }

    pub fn d_params(&self) -> &[Var] {
        &self.d_params
    }

    pub fn g_params(&self) -> &[Var] {
        &self.g_params
    }

    // ========== 训练 ==========

    /// 完整训练：预训练 -> 权重拷贝 -> 交替训练 -> 绘图/动画
    pub fn train(&mut self) -> Result<TrainingReport, GanError> {
        self.pretrain()?;
        self.copy_disc_weights_from_pretrained()?;
        for step in 0..self.config.num_steps {
            self.train_step(step)?;
        }

        self.set_phase(TrainingPhase::Rendering);
        let range = self.gen.range();
        let (final_snapshot, output_path) = match self.config.animation_output_path.clone() {
            Some(path) => {
                Vision::save_animation(&self.anim_frames, range, &path)?;
                info!(path = %path.display(), frames = self.anim_frames.len(), "动画已保存");
                (self.anim_frames.last().cloned(), path)
            }
            None => {
                let snapshot = self.samples()?;
                let path = self.config.plot_output_path.clone();
                Vision::save_plot(&snapshot, range, &path)?;
                info!(path = %path.display(), "分布图已保存");
                (Some(snapshot), path)
            }
        };
        self.set_phase(TrainingPhase::Done);

        Ok(TrainingReport {
            pre_loss_vals: self.pre_loss_vals.clone(),
            history: self.history.clone(),
            final_snapshot,
            output_path,
        })
    }

    /// 预训练 D_pre：输入为[-5, 5)上的均匀样本，标签为真实分布在该处的概率密度
    pub fn pretrain(&mut self) -> Result<&[f32], GanError> {
        self.expect_phase(TrainingPhase::Uninitialized, "预训练")?;
        self.set_phase(TrainingPhase::Pretraining);
        let batch = self.config.batch_size;

        self.pre_loss_vals.clear();
        for _ in 0..self.config.num_pretrain_steps {
            let d: Vec<f32> = (0..batch)
                .map(|_| (self.rng.gen::<f32>() - 0.5) * PRETRAIN_INPUT_SPAN)
                .collect();
            let labels: Vec<f32> = d.iter().map(|&v| self.data.pdf(v)).collect();
            self.pre_input.set_value(&Tensor::column(&d))?;
            self.pre_labels.set_value(&Tensor::column(&labels))?;
            let loss = self.pre_opt.minimize(&self.pre_loss)?;
            self.pre_loss_vals.push(loss);
        }

        self.weights_d = self
            .d_pre_params
            .iter()
            .map(|v| {
                v.value()?.ok_or_else(|| {
                    GraphError::ComputationError(format!("预训练参数{v:?}没有值"))
                })
            })
            .collect::<Result<Vec<_>, GraphError>>()?;

        info!(
            steps = self.pre_loss_vals.len(),
            final_loss = ?self.pre_loss_vals.last(),
            "判别器预训练完成"
        );
        Ok(&self.pre_loss_vals)
    }

    /// 按登记顺序把预训练得到的参数值逐个拷贝给 Disc
    pub fn copy_disc_weights_from_pretrained(&mut self) -> Result<(), GanError> {
        self.expect_phase(TrainingPhase::Pretraining, "权重拷贝")?;
        self.set_phase(TrainingPhase::WeightTransfer);
        if self.weights_d.len() != self.d_params.len() {
            return Err(GraphError::InvalidOperation(format!(
                "预训练参数个数{}与判别器参数个数{}不一致",
                self.weights_d.len(),
                self.d_params.len()
            ))
            .into());
        }
        for (param, weight) in self.d_params.iter().zip(&self.weights_d) {
            param.set_value(weight)?;
        }
        Ok(())
    }

    /// 交替训练的一步：先更新判别器，再更新生成器
    pub fn train_step(&mut self, step: usize) -> Result<StepLosses, GanError> {
        match self.phase {
            TrainingPhase::WeightTransfer | TrainingPhase::Alternating(_) => {}
            actual => {
                return Err(GanError::InvalidPhase {
                    operation: "交替训练",
                    actual,
                })
            }
        }
        self.phase = TrainingPhase::Alternating(step);
        let batch = self.config.batch_size;

        // 判别器这一步的 z 同样取自真实分布
        let x = self.data.sample(batch, &mut self.rng);
        let z = self.data.sample(batch, &mut self.rng);
        self.x.set_value(&Tensor::column(&x))?;
        self.z.set_value(&Tensor::column(&z))?;
        let loss_d = self.opt_d.minimize(&self.loss_d)?;

        let z = self.gen.sample(batch, &mut self.rng);
        self.z.set_value(&Tensor::column(&z))?;
        let loss_g = self.opt_g.minimize(&self.loss_g)?;

        if self.config.log_every > 0 && step % self.config.log_every == 0 {
            info!("{step}: {loss_d}\t{loss_g}");
        }

        let losses = StepLosses {
            step,
            loss_d,
            loss_g,
        };
        self.history.push(losses);

        if self.config.animation_output_path.is_some() {
            let snapshot = self.samples()?;
            self.anim_frames.push(snapshot);
        }
        Ok(losses)
    }

    // ========== 评估 ==========

    /// 当前的决策边界、真实分布直方图与生成分布直方图
    pub fn samples(&mut self) -> Result<Snapshot, GanError> {
        let range = self.gen.range();
        let xs = linspace(-range, range, SNAPSHOT_NUM_POINTS);
        let bins = linspace(-range, range, SNAPSHOT_NUM_BINS);

        let decision_boundary = self.discriminate(&xs)?;

        let d = self.data.sample(SNAPSHOT_NUM_POINTS, &mut self.rng);
        let real_density = histogram_density(&d, &bins)?;

        let zs = linspace(-range, range, SNAPSHOT_NUM_POINTS);
        let g = self.generate(&zs)?;
        let generated_density = histogram_density(&g, &bins)?;

        Ok(Snapshot {
            decision_boundary,
            real_density,
            generated_density,
        })
    }

    /// 判别器 D(x) 在给定点上的输出（按 batch 评估，末尾不足一个 batch 的点被丢弃）
    pub fn discriminate(&self, points: &[f32]) -> Result<Vec<f32>, GanError> {
        self.evaluate_in_batches(&self.x, &self.d_data, points)
    }

    /// 生成器 G(z) 在给定噪声上的输出（同样只评估完整的 batch）
    pub fn generate(&self, noise: &[f32]) -> Result<Vec<f32>, GanError> {
        self.evaluate_in_batches(&self.z, &self.g, noise)
    }

    /// 预训练判别器 D_pre 在给定点上的输出
    pub fn discriminate_pretrained(&self, points: &[f32]) -> Result<Vec<f32>, GanError> {
        self.evaluate_in_batches(&self.pre_input, &self.d_pre, points)
    }

    fn evaluate_in_batches(
        &self,
        input: &Var,
        output: &Var,
        points: &[f32],
    ) -> Result<Vec<f32>, GanError> {
        let batch = self.config.batch_size;
        let mut values = Vec::with_capacity(points.len() / batch * batch);
        for chunk in points.chunks_exact(batch) {
            input.set_value(&Tensor::column(chunk))?;
            output.forward()?;
            let value = output.value()?.ok_or_else(|| {
                GraphError::ComputationError(format!("输出{output:?}没有值"))
            })?;
            values.extend(value.to_vec());
        }
        Ok(values)
    }

    // ========== 阶段 ==========

    fn set_phase(&mut self, phase: TrainingPhase) {
        debug!(from = ?self.phase, to = ?phase, "训练阶段切换");
        self.phase = phase;
    }

    fn expect_phase(&self, expected: TrainingPhase, operation: &'static str) -> Result<(), GanError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GanError::InvalidPhase {
                operation,
                actual: self.phase,
            })
        }
    }
}
