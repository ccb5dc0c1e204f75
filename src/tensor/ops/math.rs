use crate::tensor::Tensor;

/// 逐元素的数学函数
impl Tensor {
    pub fn map(&self, f: impl Fn(f32) -> f32) -> Self {
        Self::from_array(self.data.mapv(f))
    }

    pub fn tanh(&self) -> Self {
        self.map(f32::tanh)
    }

    /// 数值稳定的sigmoid：x<0时改用 e^x / (1 + e^x)，避免e^(-x)溢出
    pub fn sigmoid(&self) -> Self {
        self.map(|x| {
            if x >= 0.0 {
                1.0 / (1.0 + (-x).exp())
            } else {
                let e = x.exp();
                e / (1.0 + e)
            }
        })
    }

    /// 数值稳定的softplus：ln(1 + e^x) = max(x, 0) + ln(1 + e^(-|x|))
    pub fn softplus(&self) -> Self {
        self.map(|x| x.max(0.0) + (-x.abs()).exp().ln_1p())
    }

    pub fn exp(&self) -> Self {
        self.map(f32::exp)
    }

    /// 自然对数。非正数的对数不做特殊处理（得到-inf或NaN）
    pub fn ln(&self) -> Self {
        self.map(f32::ln)
    }

    pub fn abs(&self) -> Self {
        self.map(f32::abs)
    }

    /// 符号函数：x>0为1，x<0为-1，x==0为0（作为|x|在0处的次梯度）
    pub fn sign(&self) -> Self {
        self.map(|x| {
            if x > 0.0 {
                1.0
            } else if x < 0.0 {
                -1.0
            } else {
                0.0
            }
        })
    }

    /// 逐元素倒数
    pub fn recip(&self) -> Self {
        self.map(f32::recip)
    }

    pub fn square(&self) -> Self {
        self.map(|x| x * x)
    }

    /// 所有元素之和
    pub fn sum(&self) -> f32 {
        self.data.sum()
    }

    /// 所有元素的平均值（空张量返回NaN）
    pub fn mean(&self) -> f32 {
        self.sum() / self.size() as f32
    }
}
