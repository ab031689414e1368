//! Localized labels for front ends.

use crate::estimator::ReadingStatus;
use crate::insights::MoodBand;
use crate::language::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiText {
    pub ready_status: &'static str,
    pub silence_status: &'static str,
    pub capturing_status: &'static str,
    pub distilling_status: &'static str,
    pub translating_status: &'static str,
    pub signature_blend: &'static str,
    pub mood_composition: &'static str,
    pub intensity: &'static str,
    pub sensation: &'static str,
    pub real_recipe: &'static str,
    pub mood_music: &'static str,
    pub coping_tip: &'static str,
    pub no_drink: &'static str,
    pub journey_title: &'static str,
    pub empty_shelf: &'static str,
    pub empty_shelf_sub: &'static str,
    pub wave_title: &'static str,
    pub not_enough_data: &'static str,
    pub weekly_breakdown: &'static str,
    pub dominant_mood: &'static str,
    pub report_title: &'static str,
    pub analyzing: &'static str,
    pub recommended_title: &'static str,
    pub report_no_data: &'static str,
    pub mood_label: &'static str,
    pub negative: &'static str,
    pub neutral: &'static str,
    pub positive: &'static str,
}

const EN: UiText = UiText {
    ready_status: "Ready to listen...",
    silence_status: "Silence is an ingredient too...",
    capturing_status: "Capturing your essence...",
    distilling_status: "Distilling your emotions...",
    translating_status: "Translating your blend...",
    signature_blend: "Your Signature Blend",
    mood_composition: "Mood Composition",
    intensity: "Intensity",
    sensation: "Sensation",
    real_recipe: "Mix It For Real",
    mood_music: "Mood Music",
    coping_tip: "A Small Kindness",
    no_drink: "No Drink Found",
    journey_title: "Your Journey",
    empty_shelf: "The shelf is empty.",
    empty_shelf_sub: "Start a session to fill your menu.",
    wave_title: "Emotional Wave (Last 7 Days)",
    not_enough_data: "Not enough data to map your wave.",
    weekly_breakdown: "Weekly Breakdown",
    dominant_mood: "Dominant Mood",
    report_title: "Period Report",
    analyzing: "Analyzing...",
    recommended_title: "Recommended for this period",
    report_no_data: "Not enough data this week to generate a report.",
    mood_label: "Mood",
    negative: "Negative",
    neutral: "Neutral",
    positive: "Positive",
};

const ZH: UiText = UiText {
    ready_status: "准备倾听...",
    silence_status: "沉默也是一种配方...",
    capturing_status: "正在捕捉你的情绪...",
    distilling_status: "正在提炼情感...",
    translating_status: "正在翻译你的特调...",
    signature_blend: "你的专属特调",
    mood_composition: "情绪成分",
    intensity: "烈度",
    sensation: "口感 / 体感",
    real_recipe: "真实配方",
    mood_music: "情绪音乐",
    coping_tip: "小小的善意",
    no_drink: "未找到饮品",
    journey_title: "情感旅程",
    empty_shelf: "酒架空空如也。",
    empty_shelf_sub: "开始一次会话来丰富你的菜单。",
    wave_title: "情绪波动 (近7天)",
    not_enough_data: "数据不足，无法绘制波动图。",
    weekly_breakdown: "周度分析",
    dominant_mood: "主导情绪",
    report_title: "周期报告",
    analyzing: "分析中...",
    recommended_title: "本周期推荐饮品",
    report_no_data: "本周数据不足，无法生成报告。",
    mood_label: "情绪值",
    negative: "消极",
    neutral: "平稳",
    positive: "积极",
};

impl UiText {
    pub fn for_language(language: Language) -> &'static UiText {
        match language {
            Language::En => &EN,
            Language::Zh => &ZH,
        }
    }

    pub fn status_line(&self, status: ReadingStatus) -> &'static str {
        match status {
            ReadingStatus::Silent => self.silence_status,
            ReadingStatus::Capturing => self.capturing_status,
        }
    }

    pub fn band_label(&self, band: MoodBand) -> &'static str {
        match band {
            MoodBand::Negative => self.negative,
            MoodBand::Neutral => self.neutral,
            MoodBand::Positive => self.positive,
        }
    }
}
