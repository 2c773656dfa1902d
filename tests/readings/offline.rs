use crate::common::{client, mock_login_flow, mock_readings, setup_server, share_record};
use serde_json::json;

#[test]
fn readings_are_converted_in_service_order() {
    let server = setup_server();
    let _login = mock_login_flow(&server);
    let mock = mock_readings(
        &server,
        60,
        3,
        json!([
            share_record(120, "FortyFiveUp", 1_691_455_258_000),
            share_record(100, "Flat", 1_691_454_958_000),
            share_record(80, "DoubleDown", 1_691_454_658_000)
        ]),
    );

    let readings = client(&server).get_glucose_readings(60, 3).unwrap();

    mock.assert();
    assert_eq!(readings.len(), 3);

    let mmol: Vec<f64> = readings.iter().map(|r| r.mmol_l()).collect();
    assert_eq!(mmol, vec![6.7, 5.6, 4.4]);

    let arrows: Vec<_> = readings.iter().map(|r| r.trend_arrow()).collect();
    assert_eq!(arrows, vec![Some("↗"), Some("→"), Some("↓↓")]);

    assert_eq!(readings[0].mg_dl(), 120);
    assert_eq!(readings[0].value(), 120);
    assert_eq!(readings[0].trend(), "FortyFiveUp");
    assert_eq!(
        readings[0].timestamp().map(|t| t.timestamp()),
        Some(1_691_455_258)
    );
}

#[test]
fn latest_reading_asks_for_one_value_over_a_day() {
    let server = setup_server();
    let _login = mock_login_flow(&server);
    let mock = mock_readings(
        &server,
        1440,
        1,
        json!([{"Value": 110, "Trend": "SingleDown"}]),
    );

    let reading = client(&server).get_latest_glucose_reading().unwrap();

    mock.assert();
    assert_eq!(reading.mg_dl(), 110);
    assert_eq!(reading.mmol_l(), 6.1);
    assert_eq!(reading.trend_arrow(), Some("↓"));
}

#[test]
fn current_reading_asks_for_one_value_over_ten_minutes() {
    let server = setup_server();
    let _login = mock_login_flow(&server);
    let mock = mock_readings(&server, 10, 1, json!([{"Value": 95, "Trend": "SingleUp"}]));

    let reading = client(&server).get_current_glucose_reading().unwrap();

    mock.assert();
    assert_eq!(reading.mg_dl(), 95);
    assert_eq!(reading.trend_arrow(), Some("↑"));
}

#[test]
fn unknown_trend_code_has_no_arrow() {
    let server = setup_server();
    let _login = mock_login_flow(&server);
    let _mock = mock_readings(&server, 10, 1, json!([{"Value": 95, "Trend": "None"}]));

    let reading = client(&server).get_current_glucose_reading().unwrap();
    assert_eq!(reading.trend(), "None");
    assert_eq!(reading.trend_arrow(), None);
}

#[test]
fn empty_array_is_an_empty_vec() {
    let server = setup_server();
    let _login = mock_login_flow(&server);
    let mock = mock_readings(&server, 30, 6, json!([]));

    let readings = client(&server).get_glucose_readings(30, 6).unwrap();

    mock.assert();
    assert!(readings.is_empty());
}

#[test]
fn one_client_serves_repeated_calls() {
    let server = setup_server();
    let (auth, login) = mock_login_flow(&server);
    let mock = mock_readings(&server, 10, 1, json!([{"Value": 101, "Trend": "Flat"}]));

    let client = client(&server);
    for _ in 0..3 {
        assert_eq!(client.get_current_glucose_reading().unwrap().mg_dl(), 101);
    }

    auth.assert_calls(1);
    login.assert_calls(1);
    mock.assert_calls(3);
}
