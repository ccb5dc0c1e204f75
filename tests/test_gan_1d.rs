/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : 一维 GAN 集成测试：完整训练流程 + 图片/动图输出
 */

use std::path::PathBuf;

use gan_1d::gan::{Gan, GanConfig, SNAPSHOT_NUM_BINS};
use gan_1d::vision::{ANIMATION_SIZE, PLOT_SIZE};

fn output_dir() -> PathBuf {
    let dir = std::env::temp_dir().join("gan_1d_integration_tests");
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_train_and_save_plot() {
    let plot_path = output_dir().join("plot.png");
    let _ = std::fs::remove_file(&plot_path);
    let config = GanConfig {
        num_steps: 20,
        num_pretrain_steps: 100,
        log_every: 5,
        plot_output_path: plot_path.clone(),
        ..GanConfig::default()
    };

    let mut gan = Gan::new(config).unwrap();
    let report = gan.train().unwrap();

    assert_eq!(report.pre_loss_vals.len(), 100);
    assert_eq!(report.history.len(), 20);
    assert!(report
        .history
        .iter()
        .all(|l| l.loss_d.is_finite() && l.loss_g.is_finite()));
    assert_eq!(report.output_path, plot_path);

    let image = image::open(&plot_path).unwrap();
    assert_eq!((image.width(), image.height()), PLOT_SIZE);

    let snapshot = report.final_snapshot.unwrap();
    // 归一化直方图：密度 × 区间宽度之和为1
    let bin_width = 16.0 / (SNAPSHOT_NUM_BINS - 1) as f32;
    let total: f32 = snapshot.real_density.iter().map(|d| d * bin_width).sum();
    assert!((total - 1.0).abs() < 1e-3);
}

#[test]
fn test_train_and_save_animation() {
    let anim_path = output_dir().join("anim.gif");
    let _ = std::fs::remove_file(&anim_path);
    let config = GanConfig {
        num_steps: 3,
        num_pretrain_steps: 10,
        animation_output_path: Some(anim_path.clone()),
        ..GanConfig::default()
    };

    let mut gan = Gan::new(config).unwrap();
    let report = gan.train().unwrap();

    assert_eq!(gan.anim_frames().len(), 3);
    assert_eq!(report.final_snapshot.as_ref(), gan.anim_frames().last());
    assert_eq!(report.output_path, anim_path);

    let image = image::open(&anim_path).unwrap();
    assert_eq!((image.width(), image.height()), ANIMATION_SIZE);
}

#[test]
fn test_minibatch_discrimination_training() {
    let config = GanConfig {
        num_steps: 10,
        num_pretrain_steps: 20,
        use_minibatch_discrimination: true,
        plot_output_path: output_dir().join("minibatch.png"),
        ..GanConfig::default()
    };

    let mut gan = Gan::new(config).unwrap();
    let report = gan.train().unwrap();

    assert_eq!(report.history.len(), 10);
    assert!(report.history.iter().all(|l| l.loss_g.is_finite()));
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["history"].as_array().unwrap().len(), 10);
}
