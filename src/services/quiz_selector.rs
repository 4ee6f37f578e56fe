//! 抽题服务 - 业务能力层
//!
//! 从题目池中随机抽取一道本轮未出现过的题目。
//! 已出现题目的记录完全由调用方负责，抽题不会修改题目池。

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::models::Question;

/// 从 `pool` 中均匀随机抽取一道 ID 不在 `seen` 中的题目
///
/// 所有题目都已出现过时返回 [`AppError::Exhausted`]，绝不会退回到已出现的题目。
pub fn next_question<'a, R>(
    pool: &'a [Question],
    seen: &HashSet<i64>,
    rng: &mut R,
) -> AppResult<&'a Question>
where
    R: Rng + ?Sized,
{
    let candidates: Vec<&Question> = pool.iter().filter(|q| !seen.contains(&q.id)).collect();
    debug!(
        "题目池 {} 道, 已出现 {} 道, 候选 {} 道",
        pool.len(),
        seen.len(),
        candidates.len()
    );

    candidates
        .choose(rng)
        .copied()
        .ok_or_else(|| AppError::exhausted(pool.len()))
}

/// 抽题器
///
/// 持有注入的随机数源；测试中使用固定种子即可得到确定结果。
pub struct QuizSelector<R = StdRng> {
    rng: Mutex<R>,
}

impl QuizSelector<StdRng> {
    /// 使用固定种子创建
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// 使用系统熵创建
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// 根据可选种子创建
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl<R: RngCore> QuizSelector<R> {
    /// 使用自定义随机数源创建
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// 抽取下一道题
    pub fn pick<'a>(&self, pool: &'a [Question], seen: &HashSet<i64>) -> AppResult<&'a Question> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        next_question(pool, seen, &mut *rng)
    }
}
