use crate::common::{SESSION_ID, client, mock_login_flow, mock_readings, path, setup_server};
use dexcom_share::DexcomError;
use httpmock::Method::POST;
use serde_json::json;

#[test]
fn empty_result_is_an_error_for_single_reading_calls() {
    let server = setup_server();
    let _login = mock_login_flow(&server);
    let latest = mock_readings(&server, 1440, 1, json!([]));
    let current = mock_readings(&server, 10, 1, json!([]));

    let client = client(&server);

    let err = client.get_latest_glucose_reading().unwrap_err();
    assert!(matches!(err, DexcomError::NoReadingsAvailable), "{err:?}");
    let err = client.get_current_glucose_reading().unwrap_err();
    assert!(matches!(err, DexcomError::NoReadingsAvailable), "{err:?}");

    latest.assert();
    current.assert();
}

#[test]
fn record_missing_trend_fails_the_whole_batch() {
    let server = setup_server();
    let _login = mock_login_flow(&server);
    let _mock = mock_readings(
        &server,
        60,
        3,
        json!([
            {"Value": 120, "Trend": "Flat"},
            {"Value": 118},
            {"Value": 117, "Trend": "Flat"}
        ]),
    );

    let err = client(&server).get_glucose_readings(60, 3).unwrap_err();
    match err {
        DexcomError::MalformedReading(msg) => {
            assert!(msg.contains("record 1"), "{msg}");
            assert!(msg.contains("Trend"), "{msg}");
        }
        other => panic!("expected MalformedReading, got {other:?}"),
    }
}

#[test]
fn non_integer_value_is_malformed() {
    let server = setup_server();
    let _login = mock_login_flow(&server);
    let _mock = mock_readings(&server, 10, 1, json!([{"Value": "high", "Trend": "Flat"}]));

    let err = client(&server).get_current_glucose_reading().unwrap_err();
    assert!(matches!(err, DexcomError::MalformedReading(_)), "{err:?}");
}

#[test]
fn out_of_range_arguments_send_nothing() {
    let server = setup_server();
    let _login = mock_login_flow(&server);
    let any_read = server.mock(|when, then| {
        when.method(POST)
            .path(path("Publisher/ReadPublisherLatestGlucoseValues"));
        then.status(200).json_body(json!([]));
    });

    let client = client(&server);
    for (minutes, max_count) in [(0, 1), (1441, 1), (10, 0), (10, 289)] {
        let err = client.get_glucose_readings(minutes, max_count).unwrap_err();
        assert!(
            matches!(err, DexcomError::InvalidArgument(_)),
            "({minutes}, {max_count}) -> {err:?}"
        );
    }
    assert_eq!(any_read.calls(), 0);
}

#[test]
fn expired_session_fault_is_a_session_error() {
    let server = setup_server();
    let _login = mock_login_flow(&server);
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(path("Publisher/ReadPublisherLatestGlucoseValues"))
            .json_body(json!({"sessionId": SESSION_ID, "minutes": 1440, "maxCount": 1}));
        then.status(500)
            .header("content-type", "application/json")
            .json_body(json!({
                "Code": "SessionIdNotFound",
                "Message": "Publisher session id not found"
            }));
    });

    let err = client(&server).get_latest_glucose_reading().unwrap_err();

    mock.assert();
    assert!(err.is_credentials());
    match err {
        DexcomError::Session(msg) => assert!(msg.contains("SessionIdNotFound"), "{msg}"),
        other => panic!("expected Session error, got {other:?}"),
    }
}

#[test]
fn other_vendor_faults_pass_through() {
    let server = setup_server();
    let _login = mock_login_flow(&server);
    let _mock = server.mock(|when, then| {
        when.method(POST)
            .path(path("Publisher/ReadPublisherLatestGlucoseValues"));
        then.status(400)
            .header("content-type", "application/json")
            .json_body(json!({"Code": "InvalidArgument", "Message": "maxCount out of range"}));
    });

    let err = client(&server).get_current_glucose_reading().unwrap_err();
    assert!(!err.is_transport(), "vendor rejection is not a network failure: {err:?}");
    assert!(!err.is_credentials());
    match err {
        DexcomError::Vendor {
            status,
            code,
            message,
        } => {
            assert_eq!(status, 400);
            assert_eq!(code, "InvalidArgument");
            assert_eq!(message, "maxCount out of range");
        }
        other => panic!("expected Vendor error, got {other:?}"),
    }
}

#[test]
fn non_array_body_is_a_parse_error() {
    let server = setup_server();
    let _login = mock_login_flow(&server);
    let _mock = mock_readings(&server, 10, 1, json!({"Value": 100, "Trend": "Flat"}));

    let err = client(&server).get_current_glucose_reading().unwrap_err();
    assert!(matches!(err, DexcomError::ResponseParse(_)), "{err:?}");
}

#[test]
fn unterminated_timestamp_is_malformed() {
    let server = setup_server();
    let _login = mock_login_flow(&server);
    let _mock = mock_readings(
        &server,
        10,
        1,
        json!([{"Value": 100, "Trend": "Flat", "WT": "Date(1691455258000"}]),
    );

    let err = client(&server).get_current_glucose_reading().unwrap_err();
    match err {
        DexcomError::MalformedReading(msg) => assert!(msg.contains("WT"), "{msg}"),
        other => panic!("expected MalformedReading, got {other:?}"),
    }
}
