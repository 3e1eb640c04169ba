//
// Copyright (c) batteryd contributors
// See License.txt for details
use eyre::Result;
use tiny_http::{Method, Request, ResponseBox};

use crate::http_server::{error_response, json_response, HttpHandler, HttpHandlerResult};

use super::provider::{BatterySource, BatteryStatsProvider};

/// URL serving one-shot battery readings.
pub const BATTERY_STATS_URL: &str = "/v1/battery/stats";

/// Exposes [BatteryStatsProvider] to local clients.
pub struct BatteryStatsHandler<S: BatterySource> {
    provider: BatteryStatsProvider<S>,
}

impl<S: BatterySource> BatteryStatsHandler<S> {
    pub fn new(provider: BatteryStatsProvider<S>) -> Self {
        Self { provider }
    }

    fn handle_read(&self) -> Result<ResponseBox> {
        match self.provider.get_battery_stats() {
            Ok(reading) => json_response(serde_json::to_string(&reading)?),
            // Operation failures keep their JSON shape so clients get the
            // platform message back, not a bare 500.
            Err(e) => error_response(&e.to_string()),
        }
    }
}

impl<S: BatterySource + Send + Sync> HttpHandler for BatteryStatsHandler<S> {
    fn handle_request(&self, request: &mut Request) -> HttpHandlerResult {
        if request.url() != BATTERY_STATS_URL || *request.method() != Method::Get {
            return HttpHandlerResult::NotHandled;
        }
        self.handle_read().into()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use tiny_http::{Method, StatusCode, TestRequest};

    use crate::battery::provider::{BatterySnapshot, MockBatterySource, PlatformQueryError};
    use crate::http_server::{HttpHandler, HttpHandlerResult};

    use super::*;

    #[rstest]
    fn serves_a_reading() {
        let handler = handler_reading(Some(4200), 1_500_000);

        let r = TestRequest::new()
            .with_method(Method::Get)
            .with_path(BATTERY_STATS_URL);

        let response = handler
            .handle_request(&mut r.into())
            .expect("expected a response");
        assert_eq!(response.status_code(), StatusCode(200));
    }

    #[rstest]
    fn platform_failure_is_a_500_response() {
        let mut source = MockBatterySource::new();
        source
            .expect_status_snapshot()
            .returning(|| Err(PlatformQueryError::new("service unreachable")));
        let handler = BatteryStatsHandler::new(BatteryStatsProvider::new(source));

        let r = TestRequest::new()
            .with_method(Method::Get)
            .with_path(BATTERY_STATS_URL);

        let response = handler
            .handle_request(&mut r.into())
            .expect("expected a response");
        assert_eq!(response.status_code(), StatusCode(500));
    }

    #[rstest]
    #[case::wrong_path(Method::Get, "/v1/battery")]
    #[case::wrong_method(Method::Post, BATTERY_STATS_URL)]
    #[case::wrong_method_delete(Method::Delete, BATTERY_STATS_URL)]
    fn ignores_other_requests(#[case] method: Method, #[case] path: &str) {
        let handler = handler_reading(Some(4200), 1_500_000);

        let r = TestRequest::new().with_method(method).with_path(path);

        assert!(matches!(
            handler.handle_request(&mut r.into()),
            HttpHandlerResult::NotHandled
        ));
    }

    fn handler_reading(
        voltage_millivolts: Option<i64>,
        current_microamps: i64,
    ) -> BatteryStatsHandler<MockBatterySource> {
        let mut source = MockBatterySource::new();
        source
            .expect_status_snapshot()
            .returning(move || Ok(BatterySnapshot { voltage_millivolts }));
        source
            .expect_current_now_microamps()
            .returning(move || Ok(current_microamps));
        BatteryStatsHandler::new(BatteryStatsProvider::new(source))
    }
}
