// Shared raw report fixtures

pub const HOURLY_WHITESPACE: &str = "
 eth0  /  hourly

         hour        rx      |     tx      |    total    |   avg. rate
     ------------------------+-------------+-------------+---------------
     2024-05-01
         14:00      1.00 MiB |    2.00 MiB |    3.00 MiB |    6.99 kbit/s
         15:00      4.00 MiB |    1.00 MiB |    5.00 MiB |   11.65 kbit/s
     ------------------------+-------------+-------------+---------------
";

pub const MONTHLY_WHITESPACE: &str = "
 eth0  /  monthly

       month        rx      |     tx      |    total    |   avg. rate
    ------------------------+-------------+-------------+---------------
      Apr '24      9.41 GiB |    1.20 GiB |   10.61 GiB |   35.17 Mbit/s
      2024-05     12.00 GiB |    2.00 GiB |   14.00 GiB |   44.41 Mbit/s
    ------------------------+-------------+-------------+---------------
    estimated     14.00 GiB |    2.50 GiB |   16.50 GiB |
";

pub const DAILY_PIPE: &str = "\
day | rx | tx | total | avg rx | avg tx
2024-05-01 | 1.00 GiB | 512.00 MiB | 1.50 GiB | 99.42 kbit/s | 49.71 kbit/s
2024-05-02 | 2.00 GiB | 1.00 GiB | 3.00 GiB
2024-05-03 | 3.00 GiB | 1.00 GiB | 4.00 GiB | 298.26 kbit/s | 99.42 kbit/s
";

pub const JSON_REPORT: &str = r#"{
  "vnstatversion": "2.9",
  "jsonversion": "2",
  "interfaces": [
    {
      "name": "eth0",
      "traffic": {
        "hours": [
          {"id": 1, "date": {"year": 2024, "month": 5, "day": 1}, "time": {"hour": 23, "minute": 0}, "rx": 3600000000, "tx": 0},
          {"id": 2, "date": {"year": 2024, "month": 5, "day": 2}, "time": {"hour": 0, "minute": 0}, "rx": 1, "tx": 2}
        ],
        "days": [
          {"id": 1, "date": {"year": 2024, "month": 5, "day": 1}, "rx": 8640000000, "tx": 4320000000},
          {"id": 2, "date": {"year": 2024, "month": 5, "day": 2}, "rx": 10, "tx": 20}
        ],
        "months": [
          {"id": 1, "date": {"year": 2024, "month": 5}, "rx": 2687385600, "tx": 1343692800, "days": 31},
          {"id": 2, "date": {"year": 2024, "month": 6}, "rx": 100, "tx": 200, "days": 0}
        ]
      }
    },
    {
      "name": "wlan0",
      "traffic": {
        "days": [
          {"id": 1, "date": {"year": 2024, "month": 5, "day": 1}, "rx": 7, "tx": 8}
        ]
      }
    }
  ]
}"#;
