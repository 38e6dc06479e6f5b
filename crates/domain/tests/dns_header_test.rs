use zutil_dns_domain::{OpCode, ResponseCode};

#[test]
fn test_op_code_values() {
    assert_eq!(OpCode::Query.to_u8(), 0);
    assert_eq!(OpCode::IQuery.to_u8(), 1);
    assert_eq!(OpCode::Status.to_u8(), 2);
    assert_eq!(OpCode::from_u8(5), OpCode::Unknown(5));
    assert_eq!(OpCode::default(), OpCode::Query);

    for code in 0..=15u8 {
        assert_eq!(OpCode::from_u8(code).to_u8(), code);
    }
}

#[test]
fn test_op_code_from_str() {
    assert_eq!("query".parse::<OpCode>().unwrap(), OpCode::Query);
    assert_eq!("STATUS".parse::<OpCode>().unwrap(), OpCode::Status);
    assert_eq!("OPCODE4".parse::<OpCode>().unwrap(), OpCode::Unknown(4));
    assert!("16".parse::<OpCode>().is_err());
    assert!("notify-ish".parse::<OpCode>().is_err());
}

#[test]
fn test_response_code_values() {
    assert_eq!(ResponseCode::NoError.to_u8(), 0);
    assert_eq!(ResponseCode::FormatError.to_u8(), 1);
    assert_eq!(ResponseCode::ServerFailure.to_u8(), 2);
    assert_eq!(ResponseCode::NameError.to_u8(), 3);
    assert_eq!(ResponseCode::NotImplemented.to_u8(), 4);
    assert_eq!(ResponseCode::Refused.to_u8(), 5);

    for code in 0..=15u8 {
        assert_eq!(ResponseCode::from_u8(code).to_u8(), code);
    }
}

#[test]
fn test_response_code_display() {
    assert_eq!(ResponseCode::NoError.to_string(), "NOERROR");
    assert_eq!(ResponseCode::NameError.to_string(), "NXDOMAIN");
    assert_eq!(ResponseCode::Unknown(9).to_string(), "RCODE9");
    assert!(!ResponseCode::NoError.is_error());
    assert!(ResponseCode::Refused.is_error());
}

#[test]
fn test_response_code_from_str() {
    assert_eq!("nxdomain".parse::<ResponseCode>().unwrap(), ResponseCode::NameError);
    assert_eq!("RCODE9".parse::<ResponseCode>().unwrap(), ResponseCode::Unknown(9));
    assert!("RCODE99".parse::<ResponseCode>().is_err());
}
