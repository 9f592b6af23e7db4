//! Command / reply shape tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use vmcd_core::error::{ErrorKind, ReplyPolicy, DECODE_FAILURE_MSG};
use vmcd_core::protocol::command::{
    ack_cmd, decode_command, CommandKind, LoginCommand, PaymentCommand,
};
use vmcd_core::protocol::envelope::decode_envelope;
use vmcd_core::protocol::frame::{probe, FrameProbe};
use vmcd_core::protocol::response::{encode_reply, ErrorResult, LoginResult, PaymentResult, Reply};
use vmcd_core::VmcError;

#[test]
fn command_kind_is_exact_and_case_sensitive() {
    assert_eq!(CommandKind::from_cmd("login"), Some(CommandKind::Login));
    assert_eq!(CommandKind::from_cmd("qrcode"), Some(CommandKind::QrPayment));
    assert_eq!(CommandKind::from_cmd("Login"), None);
    assert_eq!(CommandKind::from_cmd("QRCODE"), None);
    assert_eq!(CommandKind::from_cmd("ping"), None);
    assert_eq!(ack_cmd("login"), "login_r");
}

#[test]
fn login_command_full() {
    let s = br#"{"cmd":"login","vmc_no":7,"comp_id":1,"login_count":2,"sign":"x","timestamp":"t","version":"1"}"#;
    let cmd: LoginCommand = decode_command(CommandKind::Login, s).unwrap();
    assert_eq!(cmd.vmc_no, 7);
    assert_eq!(cmd.login_count, 2);
    assert_eq!(cmd.sign, "x");
    assert_eq!(cmd.version, "1");
}

#[test]
fn login_command_missing_fields_default() {
    let cmd: LoginCommand = decode_command(CommandKind::Login, br#"{"cmd":"login"}"#).unwrap();
    assert_eq!(cmd.cmd, "login");
    assert_eq!(cmd.vmc_no, 0);
    assert!(cmd.sign.is_empty());
}

#[test]
fn login_command_type_mismatch_is_decode_error() {
    let err = decode_command::<LoginCommand>(
        CommandKind::Login,
        br#"{"cmd":"login","vmc_no":"not-an-int"}"#,
    )
    .expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::Decode);
    assert_eq!(err.reply_policy(), ReplyPolicy::ErrorResult(DECODE_FAILURE_MSG));
}

#[test]
fn payment_command_uses_capitalised_amount() {
    let s = br#"{"cmd":"qrcode","order_no":"O1","product_id":5,"qr_type":"wechat","vmc_no":9,"Amount":100}"#;
    let cmd: PaymentCommand = decode_command(CommandKind::QrPayment, s).unwrap();
    assert_eq!(cmd.amount, 100);
    assert_eq!(cmd.order_no, "O1");
    assert_eq!(cmd.product_id, 5);

}

#[test]
fn command_keys_match_case_insensitively() {
    let cmd: PaymentCommand =
        decode_command(CommandKind::QrPayment, br#"{"cmd":"qrcode","amount":100}"#).unwrap();
    assert_eq!(cmd.amount, 100);

    let cmd: PaymentCommand = decode_command(
        CommandKind::QrPayment,
        br#"{"CMD":"qrcode","Vmc_No":4,"ORDER_NO":"O7","Qr_Type":"alipay","AMOUNT":3}"#,
    )
    .unwrap();
    assert_eq!(cmd.cmd, "qrcode");
    assert_eq!(cmd.vmc_no, 4);
    assert_eq!(cmd.order_no, "O7");
    assert_eq!(cmd.qr_type, "alipay");
    assert_eq!(cmd.amount, 3);

    // both spellings present: the later key wins
    let cmd: PaymentCommand =
        decode_command(CommandKind::QrPayment, br#"{"Amount":1,"amount":2}"#).unwrap();
    assert_eq!(cmd.amount, 2);
}

#[test]
fn null_fields_take_zero_value() {
    let cmd: PaymentCommand = decode_command(
        CommandKind::QrPayment,
        br#"{"cmd":"qrcode","order_no":"O1","vmc_no":null,"Amount":null,"qr_type":null}"#,
    )
    .unwrap();
    assert_eq!(cmd.order_no, "O1");
    assert_eq!(cmd.vmc_no, 0);
    assert_eq!(cmd.amount, 0);
    assert!(cmd.qr_type.is_empty());

    let cmd: LoginCommand =
        decode_command(CommandKind::Login, br#"{"cmd":"login","sign":null,"comp_id":null}"#)
            .unwrap();
    assert!(cmd.sign.is_empty());
    assert_eq!(cmd.comp_id, 0);
}

#[test]
fn null_cmd_is_an_empty_envelope() {
    let err = decode_envelope(br#"{"cmd":null}"#).expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[test]
fn non_utf8_string_bytes_are_replaced() {
    let cmd: LoginCommand =
        decode_command(CommandKind::Login, b"{\"cmd\":\"login\",\"vmc_no\":7,\"sign\":\"\xc4\"}")
            .unwrap();
    assert_eq!(cmd.vmc_no, 7);
    assert_eq!(cmd.sign, "\u{FFFD}");
}

#[test]
fn probe_accepts_non_utf8_strings() {
    assert_eq!(probe(b"HDR{\"sign\":\"\xc4\xe3\"}"), FrameProbe::Complete);
}

#[test]
fn replies_keep_wire_field_order() {
    let login = Reply::from(LoginResult {
        cmd: "login_r".into(),
        vmc_no: 7,
        carrier_code: "TW-00418".into(),
        date_time: "2024-01-02 03:04:05".into(),
        server_list: "10.0.0.1".into(),
        ret: 0,
    });
    let out = String::from_utf8(encode_reply(&login).unwrap()).unwrap();
    assert_eq!(
        out,
        r#"{"cmd":"login_r","vmc_no":7,"carrier_code":"TW-00418","date_time":"2024-01-02 03:04:05","server_list":"10.0.0.1","ret":0}"#
    );

    let pay = Reply::from(PaymentResult {
        cmd: "qrcode_r".into(),
        vmc_no: 9,
        qr_type: "wechat".into(),
        qrcode: "abc".into(),
        order_no: "O1".into(),
    });
    let out = String::from_utf8(encode_reply(&pay).unwrap()).unwrap();
    assert_eq!(
        out,
        r#"{"cmd":"qrcode_r","vmc_no":9,"qr_type":"wechat","qrcode":"abc","order_no":"O1"}"#
    );

    let err = Reply::from(ErrorResult::new(DECODE_FAILURE_MSG));
    let out = String::from_utf8(encode_reply(&err).unwrap()).unwrap();
    assert_eq!(out, r#"{"error":"failed to parse request"}"#);
}

#[test]
fn probe_tracks_completeness() {
    assert_eq!(probe(b"HDR"), FrameProbe::NoStart);
    assert_eq!(probe(br#"HDR{"cmd":"lo"#), FrameProbe::Incomplete);
    assert_eq!(probe(br#"HDR{"cmd":"login"}"#), FrameProbe::Complete);
    assert_eq!(probe(br#"{"cmd" 1}"#), FrameProbe::Invalid);
}

#[test]
fn only_decode_failures_get_a_reply() {
    assert_eq!(VmcError::Framing.reply_policy(), ReplyPolicy::Silent);
    assert_eq!(VmcError::Unrouted("ping".into()).reply_policy(), ReplyPolicy::Silent);
    assert_eq!(VmcError::Write("reset".into()).reply_policy(), ReplyPolicy::Silent);
    assert_eq!(
        VmcError::Decode("x".into()).reply_policy(),
        ReplyPolicy::ErrorResult(DECODE_FAILURE_MSG)
    );
}
