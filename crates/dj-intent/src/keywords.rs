//! Affair and industry keyword tables.
//!
//! Plain containment matching against fixed tables, with a few hand-coded
//! disambiguation rules for compound phrases.

use dj_analysis::{Affair, Industry};

/// Affair keywords in match-priority order: more specific phrases first.
const AFFAIR_KEYWORDS: &[(&str, Affair)] = &[
    ("签合同", Affair::Contract),
    ("签约", Affair::Contract),
    ("合同", Affair::Contract),
    ("协议", Affair::Contract),
    ("面试", Affair::JobInterview),
    ("求职", Affair::JobInterview),
    ("找工作", Affair::JobInterview),
    ("应聘", Affair::JobInterview),
    ("投资", Affair::Investment),
    ("理财", Affair::Investment),
    ("炒股", Affair::Investment),
    ("买股票", Affair::Investment),
    ("入股", Affair::Investment),
    ("结婚", Affair::Marriage),
    ("求婚", Affair::Marriage),
    ("领证", Affair::Marriage),
    ("相亲", Affair::Marriage),
    ("婚姻", Affair::Marriage),
    ("出差", Affair::Travel),
    ("旅行", Affair::Travel),
    ("旅游", Affair::Travel),
    ("出行", Affair::Travel),
    ("出门", Affair::Travel),
    ("打官司", Affair::Lawsuit),
    ("官司", Affair::Lawsuit),
    ("诉讼", Affair::Lawsuit),
    ("仲裁", Affair::Lawsuit),
    ("考试", Affair::Exam),
    ("考研", Affair::Exam),
    ("高考", Affair::Exam),
    ("考证", Affair::Exam),
    ("开业", Affair::Opening),
    ("开张", Affair::Opening),
    ("开店", Affair::Opening),
    ("创业", Affair::Opening),
    ("看病", Affair::Medical),
    ("就医", Affair::Medical),
    ("手术", Affair::Medical),
    ("体检", Affair::Medical),
    ("寻物", Affair::LostItem),
    ("丢失", Affair::LostItem),
    ("遗失", Affair::LostItem),
    ("丢了", Affair::LostItem),
    ("找东西", Affair::LostItem),
    ("谈判", Affair::Negotiation),
    ("洽谈", Affair::Negotiation),
    ("商谈", Affair::Negotiation),
    ("谈合作", Affair::Negotiation),
];

/// Device words that turn a lost-item match into lost-electronics.
const DEVICE_WORDS: &[&str] = &["手机", "电脑", "笔记本", "平板", "耳机", "手表"];

/// Industry keywords.
const INDUSTRY_KEYWORDS: &[(&str, Industry)] = &[
    ("金融", Industry::Finance),
    ("银行", Industry::Finance),
    ("股票", Industry::Finance),
    ("基金", Industry::Finance),
    ("科技", Industry::Technology),
    ("互联网", Industry::Technology),
    ("软件", Industry::Technology),
    ("程序", Industry::Technology),
    ("教育", Industry::Education),
    ("培训", Industry::Education),
    ("学校", Industry::Education),
    ("医疗", Industry::Healthcare),
    ("医院", Industry::Healthcare),
    ("健康", Industry::Healthcare),
    ("法律", Industry::Legal),
    ("律师", Industry::Legal),
    ("零售", Industry::Retail),
    ("电商", Industry::Retail),
    ("店铺", Industry::Retail),
    ("建筑", Industry::Construction),
    ("工程", Industry::Construction),
    ("房地产", Industry::Construction),
    ("装修", Industry::Construction),
    ("媒体", Industry::Media),
    ("广告", Industry::Media),
    ("宣传", Industry::Media),
    ("自媒体", Industry::Media),
];

/// Match an affair keyword in the text.
///
/// The compound rule: a lost-item match combined with a device word
/// becomes lost-electronics.
pub fn match_affair(text: &str) -> Option<(Affair, String)> {
    for (keyword, affair) in AFFAIR_KEYWORDS {
        if text.contains(keyword) {
            if *affair == Affair::LostItem && DEVICE_WORDS.iter().any(|d| text.contains(d)) {
                return Some((Affair::LostElectronics, (*keyword).to_string()));
            }
            return Some((*affair, (*keyword).to_string()));
        }
    }
    // A bare 丢/找 plus a device word still reads as lost electronics.
    if text.contains('丢') && DEVICE_WORDS.iter().any(|d| text.contains(d)) {
        return Some((Affair::LostElectronics, "丢".to_string()));
    }
    None
}

/// Match an industry keyword in the text.
pub fn match_industry(text: &str) -> Option<(Industry, String)> {
    INDUSTRY_KEYWORDS
        .iter()
        .find(|(keyword, _)| text.contains(keyword))
        .map(|(keyword, industry)| (*industry, (*keyword).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_phrases() {
        assert_eq!(match_affair("明天签合同").map(|(a, _)| a), Some(Affair::Contract));
        assert_eq!(match_affair("跟他们签约").map(|(a, _)| a), Some(Affair::Contract));
    }

    #[test]
    fn lost_phone_overrides_lost_item() {
        assert_eq!(
            match_affair("手机丢失了怎么办").map(|(a, _)| a),
            Some(Affair::LostElectronics)
        );
        assert_eq!(
            match_affair("丢了手机").map(|(a, _)| a),
            Some(Affair::LostElectronics)
        );
        assert_eq!(
            match_affair("钱包丢失了").map(|(a, _)| a),
            Some(Affair::LostItem)
        );
    }

    #[test]
    fn bare_diu_plus_device() {
        assert_eq!(
            match_affair("丢手机了").map(|(a, _)| a),
            Some(Affair::LostElectronics)
        );
    }

    #[test]
    fn industry_containment() {
        assert_eq!(
            match_industry("做金融的").map(|(i, _)| i),
            Some(Industry::Finance)
        );
        assert_eq!(
            match_industry("互联网公司上班").map(|(i, _)| i),
            Some(Industry::Technology)
        );
        assert_eq!(match_industry("没有行业词"), None);
    }

    #[test]
    fn no_affair_in_plain_text() {
        assert_eq!(match_affair("hello world"), None);
        assert_eq!(match_affair(""), None);
    }
}
