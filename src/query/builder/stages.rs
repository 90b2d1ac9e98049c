//! 构建器阶段标记
//!
//! 阶段以类型参数表示，每个阶段只暴露合法的下一步方法，
//! 例如在 `returning` 之前无法调用 `limit`。

/// MATCH 之后，尚无 WHERE
#[derive(Debug, Clone, Copy)]
pub struct Matched;

/// MATCH 已附带 WHERE，可继续 `and`/`or`
#[derive(Debug, Clone, Copy)]
pub struct Filtered;

/// 投影之后，尚未排序
#[derive(Debug, Clone, Copy)]
pub struct Projected;

/// 已排序
#[derive(Debug, Clone, Copy)]
pub struct Ordered;

/// 已设置 SKIP
#[derive(Debug, Clone, Copy)]
pub struct Skipped;

/// 已设置 LIMIT
#[derive(Debug, Clone, Copy)]
pub struct Limited;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Projected {}
    impl Sealed for super::Ordered {}
    impl Sealed for super::Skipped {}
    impl Sealed for super::Limited {}
}

/// 投影阶段
pub trait ProjectionStage: sealed::Sealed {}

impl ProjectionStage for Projected {}
impl ProjectionStage for Ordered {}
impl ProjectionStage for Skipped {}
impl ProjectionStage for Limited {}

/// 可以接 SKIP 的阶段
pub trait AcceptsSkip: ProjectionStage {}

impl AcceptsSkip for Projected {}
impl AcceptsSkip for Ordered {}

/// 可以接 LIMIT 的阶段
pub trait AcceptsLimit: ProjectionStage {}

impl AcceptsLimit for Projected {}
impl AcceptsLimit for Ordered {}
impl AcceptsLimit for Skipped {}
