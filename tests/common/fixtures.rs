//! Static carrier payloads used across harnesses.
//!
//! Shapes mirror what the DTDC endpoint actually returns, including the
//! inconsistent date layouts and the markup in status remarks.

/// A delivered consignment: full milestone ladder, three scan events.
pub const RESP_DELIVERED: &str = r#"{
  "statusCode": 200,
  "statusDescription": "Success",
  "errorMessage": "",
  "shipmentNo": "D10012345678",
  "header": {
    "referenceNo": "REF-88",
    "originCity": "MUMBAI",
    "originPincode": "400001",
    "destinationCity": "PUNE",
    "destinationPincode": "411001",
    "bookingDate": "2024-01-15",
    "bookingTime": "09:12:00",
    "currentStatusCode": "DLV",
    "currentStatusDescription": "Delivered",
    "currentStatusDate": "2024-01-17",
    "currentStatusTime": "14:05:33",
    "opsEdd": "2024-01-18",
    "opsRedd": "null",
    "noOfPieces": 1,
    "currentLocationCityName": "PUNE",
    "nextLocationCityName": ""
  },
  "milestones": [
    {"mileName": "Picked Up", "mileLocationName": "MUMBAI", "mileStatusDateTime": "2024-01-15 09:12:00.0", "mileStatus": "A", "branchName": "ANDHERI"},
    {"mileName": "", "mileLocationName": "", "mileStatusDateTime": "", "mileStatus": "", "branchName": ""},
    {"mileName": "In Transit", "mileLocationName": "MUMBAI HUB", "mileStatusDateTime": "2024-01-16 02:40:10.0", "mileStatus": "A", "branchName": "HUB"},
    {"mileName": "Out For Delivery", "mileLocationName": "PUNE", "mileStatusDateTime": "2024-01-17 08:01:00.0", "mileStatus": "A", "branchName": "SHIVAJINAGAR"},
    {"mileName": "Delivered", "mileLocationName": "PUNE", "mileStatusDateTime": "2024-01-17 14:05:33.0", "mileStatus": "A", "branchName": "SHIVAJINAGAR"}
  ],
  "statuses": [
    {"actBranchName": "SHIVAJINAGAR", "actCityName": "PUNE", "statusDescription": "Delivered", "remarks": "Delivered to <b>RAVI</b> <a href='https://www.dtdc.com/pod?cn=D10012345678' target='_blank'>View POD</a>", "statusTimestamp": "2024-01-17T14:05:33+05:30"},
    {"actBranchName": "SHIVAJINAGAR", "actCityName": "PUNE", "statusDescription": "Out For Delivery", "remarks": "", "statusTimestamp": "2024-01-17 08:01:00"},
    {"actBranchName": "ANDHERI", "actCityName": "MUMBAI", "statusDescription": "Picked Up", "remarks": "Consignment <span id='sc' style='color:blue;'>D10012345678</span> booked", "statusTimestamp": "2024-01-15 09:12:00.0"}
  ]
}"#;

/// Still moving: "Delivered" milestone present but not reached.
pub const RESP_IN_TRANSIT: &str = r#"{
  "statusCode": 200,
  "header": {
    "referenceNo": "",
    "originCity": "DELHI",
    "originPincode": "110001",
    "destinationCity": "CHENNAI",
    "destinationPincode": "600001",
    "bookingDate": "2024-02-01",
    "bookingTime": "",
    "currentStatusDescription": "In Transit",
    "currentStatusDate": "2024-02-02",
    "currentStatusTime": "23:59:59",
    "opsEdd": "2024-02-05T00:00:00Z",
    "currentLocationCityName": "NAGPUR",
    "nextLocationCityName": "CHENNAI"
  },
  "milestones": [
    {"mileName": "Picked Up", "mileLocationName": "DELHI", "mileStatusDateTime": "2024-02-01", "mileStatus": "A"},
    {"mileName": "In Transit", "mileLocationName": "NAGPUR", "mileStatusDateTime": "2024-02-02 23:59:59", "mileStatus": "A"},
    {"mileName": "Delivered", "mileLocationName": "", "mileStatusDateTime": "null", "mileStatus": "P"}
  ],
  "statuses": [
    {"actBranchName": "", "actCityName": "NAGPUR", "statusDescription": "In Transit", "remarks": "  ", "statusTimestamp": "02/02/2024 23:59"}
  ]
}"#;

/// The carrier's "not found" answer: mostly empty, some nulls.
pub const RESP_SPARSE: &str = r#"{
  "statusCode": 200,
  "statusDescription": "No data found",
  "errorMessage": "Invalid consignment",
  "header": {"currentStatusDate": "", "currentStatusTime": "10:00:00", "opsEdd": null, "noOfPieces": null},
  "milestones": null,
  "statuses": []
}"#;

/// Bodies that must fail to decode.
pub const RESP_MALFORMED: &[&str] = &[
    "",
    "<html><body>Service Unavailable</body></html>",
    r#"{"header": "oops"}"#,
    r#"{"milestones": {"mileName": "x"}}"#,
    r#"{"statusCode": "200"}"#,
    "42",
];
