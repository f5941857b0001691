use proptest::prelude::*;
use styloprint_settings::{AnalyzeSettings, Timeframe};

proptest! {
    #[test]
    fn any_timeframe_label_parses(label in "[a-z0-9]{0,12}") {
        let toml = format!("timeframe = \"{label}\"");
        let s = AnalyzeSettings::from_toml(&toml).expect("labels never fail");
        prop_assert_eq!(s.timeframe, Timeframe::from_label(&label));
    }

    #[test]
    fn parallel_flag_is_preserved(parallel in any::<bool>()) {
        let s = AnalyzeSettings::from_toml(&format!("parallel = {parallel}")).expect("parse");
        prop_assert_eq!(s.parallel, parallel);
    }
}
