//! 预设订单模板 (厨房维护，员工一键下单)

use shared::models::{Preset, PresetCreate};
use shared::util::non_blank;

use super::store::{StoreError, StoreResult};

#[derive(Debug, Default)]
pub struct PresetRegistry {
    presets: Vec<Preset>,
    next_id: u64,
}

impl PresetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 新增预设，名称与订单内容必填
    pub fn add(&mut self, payload: PresetCreate) -> StoreResult<Preset> {
        let (Some(name), Some(order_text)) = (
            non_blank(payload.name.as_deref()),
            non_blank(payload.order_text.as_deref()),
        ) else {
            return Err(StoreError::Validation(
                "Name and order are required".to_string(),
            ));
        };

        self.next_id += 1;
        let preset = Preset {
            id: self.next_id,
            name,
            order_text,
            requirements: non_blank(payload.requirements.as_deref()).unwrap_or_default(),
        };
        self.presets.push(preset.clone());
        Ok(preset)
    }

    /// All presets in creation order
    pub fn list(&self) -> Vec<Preset> {
        self.presets.clone()
    }
}
