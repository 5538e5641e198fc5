//! Conversion of [`HistoryBatch`] into candle tensors.
use super::HistoryBatch;
use candle_core::{Device, Result, Tensor};
use std::collections::BTreeMap;

impl HistoryBatch {
    /// Converts every field into a `f32` [`Tensor`] on `device`, keyed as in
    /// [`HistoryBatch::KEYS`].
    pub fn to_tensors(&self, device: &Device) -> Result<BTreeMap<&'static str, Tensor>> {
        self.iter()
            .map(|(key, view)| {
                let data = view.iter().copied().collect::<Vec<f32>>();
                let t = Tensor::from_vec(data, view.shape().to_vec(), device)?;
                Ok::<_, candle_core::Error>((key, t))
            })
            .collect()
    }
}
