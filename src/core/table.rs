//! Compiled-in ISO 4217 currency list, ordered by alphabetic code.

use super::currency::Currency;

pub(crate) static CURRENCIES: &[Currency] = &[
    Currency::new("AED", 784, 2, "United Arab Emirates dirham"),
    Currency::new("AFN", 971, 2, "Afghan afghani"),
    Currency::new("ALL", 8, 2, "Albanian lek"),
    Currency::new("AMD", 51, 2, "Armenian dram"),
    Currency::new("ANG", 532, 2, "Netherlands Antillean guilder"),
    Currency::new("AOA", 973, 2, "Angolan kwanza"),
    Currency::new("ARS", 32, 2, "Argentine peso"),
    Currency::new("AUD", 36, 2, "Australian dollar"),
    Currency::new("AWG", 533, 2, "Aruban florin"),
    Currency::new("AZN", 944, 2, "Azerbaijani manat"),
    Currency::new("BAM", 977, 2, "Bosnia and Herzegovina convertible mark"),
    Currency::new("BBD", 52, 2, "Barbados dollar"),
    Currency::new("BDT", 50, 2, "Bangladeshi taka"),
    Currency::new("BGN", 975, 2, "Bulgarian lev"),
    Currency::new("BHD", 48, 3, "Bahraini dinar"),
    Currency::new("BIF", 108, 0, "Burundian franc"),
    Currency::new("BMD", 60, 2, "Bermudian dollar"),
    Currency::new("BND", 96, 2, "Brunei dollar"),
    Currency::new("BOB", 68, 2, "Boliviano"),
    Currency::new("BOV", 984, 2, "Bolivian Mvdol (funds code)"),
    Currency::new("BRL", 986, 2, "Brazilian real"),
    Currency::new("BSD", 44, 2, "Bahamian dollar"),
    Currency::new("BTN", 64, 2, "Bhutanese ngultrum"),
    Currency::new("BWP", 72, 2, "Botswana pula"),
    Currency::new("BYR", 974, 0, "Belarusian ruble"),
    Currency::new("BZD", 84, 2, "Belize dollar"),
    Currency::new("CAD", 124, 2, "Canadian dollar"),
    Currency::new("CDF", 976, 2, "Congolese franc"),
    Currency::new("CHE", 947, 2, "WIR Euro (complementary currency)"),
    Currency::new("CHF", 756, 2, "Swiss franc"),
    Currency::new("CHW", 948, 2, "WIR Franc (complementary currency)"),
    Currency::new("CLF", 990, 4, "Unidad de Fomento (funds code)"),
    Currency::new("CLP", 152, 0, "Chilean peso"),
    Currency::new("CNY", 156, 2, "Chinese yuan"),
    Currency::new("COP", 170, 2, "Colombian peso"),
    Currency::new("COU", 970, 2, "Unidad de Valor Real (UVR) (funds code)"),
    Currency::new("CRC", 188, 2, "Costa Rican colon"),
    Currency::new("CUC", 931, 2, "Cuban convertible peso"),
    Currency::new("CUP", 192, 2, "Cuban peso"),
    Currency::new("CVE", 132, 0, "Cape Verde escudo"),
    Currency::new("CZK", 203, 2, "Czech koruna"),
    Currency::new("DJF", 262, 0, "Djiboutian franc"),
    Currency::new("DKK", 208, 2, "Danish krone"),
    Currency::new("DOP", 214, 2, "Dominican peso"),
    Currency::new("DZD", 12, 2, "Algerian dinar"),
    Currency::new("EGP", 818, 2, "Egyptian pound"),
    Currency::new("ERN", 232, 2, "Eritrean nakfa"),
    Currency::new("ETB", 230, 2, "Ethiopian birr"),
    Currency::new("EUR", 978, 2, "Euro"),
    Currency::new("FJD", 242, 2, "Fiji dollar"),
    Currency::new("FKP", 238, 2, "Falkland Islands pound"),
    Currency::new("GBP", 826, 2, "Pound sterling"),
    Currency::new("GEL", 981, 2, "Georgian lari"),
    Currency::new("GHS", 936, 2, "Ghanaian cedi"),
    Currency::new("GIP", 292, 2, "Gibraltar pound"),
    Currency::new("GMD", 270, 2, "Gambian dalasi"),
    Currency::new("GNF", 324, 0, "Guinean franc"),
    Currency::new("GTQ", 320, 2, "Guatemalan quetzal"),
    Currency::new("GYD", 328, 2, "Guyanese dollar"),
    Currency::new("HKD", 344, 2, "Hong Kong dollar"),
    Currency::new("HNL", 340, 2, "Honduran lempira"),
    Currency::new("HRK", 191, 2, "Croatian kuna"),
    Currency::new("HTG", 332, 2, "Haitian gourde"),
    Currency::new("HUF", 348, 2, "Hungarian forint"),
    Currency::new("IDR", 360, 2, "Indonesian rupiah"),
    Currency::new("ILS", 376, 2, "Israeli new shekel"),
    Currency::new("INR", 356, 2, "Indian rupee"),
    Currency::new("IQD", 368, 3, "Iraqi dinar"),
    Currency::new("IRR", 364, 2, "Iranian rial"),
    Currency::new("ISK", 352, 0, "Icelandic króna"),
    Currency::new("JMD", 388, 2, "Jamaican dollar"),
    Currency::new("JOD", 400, 3, "Jordanian dinar"),
    Currency::new("JPY", 392, 0, "Japanese yen"),
    Currency::new("KES", 404, 2, "Kenyan shilling"),
    Currency::new("KGS", 417, 2, "Kyrgyzstani som"),
    Currency::new("KHR", 116, 2, "Cambodian riel"),
    Currency::new("KMF", 174, 0, "Comoro franc"),
    Currency::new("KPW", 408, 2, "North Korean won"),
    Currency::new("KRW", 410, 0, "South Korean won"),
    Currency::new("KWD", 414, 3, "Kuwaiti dinar"),
    Currency::new("KYD", 136, 2, "Cayman Islands dollar"),
    Currency::new("KZT", 398, 2, "Kazakhstani tenge"),
    Currency::new("LAK", 418, 2, "Lao kip"),
    Currency::new("LBP", 422, 2, "Lebanese pound"),
    Currency::new("LKR", 144, 2, "Sri Lankan rupee"),
    Currency::new("LRD", 430, 2, "Liberian dollar"),
    Currency::new("LSL", 426, 2, "Lesotho loti"),
    Currency::new("LYD", 434, 3, "Libyan dinar"),
    Currency::new("MAD", 504, 2, "Moroccan dirham"),
    Currency::new("MDL", 498, 2, "Moldovan leu"),
    Currency::new("MGA", 969, 1, "Malagasy ariary"),
    Currency::new("MKD", 807, 2, "Macedonian denar"),
    Currency::new("MMK", 104, 2, "Myanmar kyat"),
    Currency::new("MNT", 496, 2, "Mongolian tugrik"),
    Currency::new("MOP", 446, 2, "Macanese pataca"),
    Currency::new("MRO", 478, 1, "Mauritanian ouguiya"),
    Currency::new("MUR", 480, 2, "Mauritian rupee"),
    Currency::new("MVR", 462, 2, "Maldivian rufiyaa"),
    Currency::new("MWK", 454, 2, "Malawian kwacha"),
    Currency::new("MXN", 484, 2, "Mexican peso"),
    Currency::new("MXV", 979, 2, "Mexican Unidad de Inversion (UDI) (funds code)"),
    Currency::new("MYR", 458, 2, "Malaysian ringgit"),
    Currency::new("MZN", 943, 2, "Mozambican metical"),
    Currency::new("NAD", 516, 2, "Namibian dollar"),
    Currency::new("NGN", 566, 2, "Nigerian naira"),
    Currency::new("NIO", 558, 2, "Nicaraguan córdoba"),
    Currency::new("NOK", 578, 2, "Norwegian krone"),
    Currency::new("NPR", 524, 2, "Nepalese rupee"),
    Currency::new("NZD", 554, 2, "New Zealand dollar"),
    Currency::new("OMR", 512, 3, "Omani rial"),
    Currency::new("PAB", 590, 2, "Panamanian balboa"),
    Currency::new("PEN", 604, 2, "Peruvian nuevo sol"),
    Currency::new("PGK", 598, 2, "Papua New Guinean kina"),
    Currency::new("PHP", 608, 2, "Philippine peso"),
    Currency::new("PKR", 586, 2, "Pakistani rupee"),
    Currency::new("PLN", 985, 2, "Polish złoty"),
    Currency::new("PYG", 600, 0, "Paraguayan guaraní"),
    Currency::new("QAR", 634, 2, "Qatari riyal"),
    Currency::new("RON", 946, 2, "Romanian leu"),
    Currency::new("RSD", 941, 2, "Serbian dinar"),
    Currency::new("RUB", 643, 2, "Russian ruble"),
    Currency::new("RWF", 646, 0, "Rwandan franc"),
    Currency::new("SAR", 682, 2, "Saudi riyal"),
    Currency::new("SBD", 90, 2, "Solomon Islands dollar"),
    Currency::new("SCR", 690, 2, "Seychelles rupee"),
    Currency::new("SDG", 938, 2, "Sudanese pound"),
    Currency::new("SEK", 752, 2, "Swedish krona/kronor"),
    Currency::new("SGD", 702, 2, "Singapore dollar"),
    Currency::new("SHP", 654, 2, "Saint Helena pound"),
    Currency::new("SLL", 694, 2, "Sierra Leonean leone"),
    Currency::new("SOS", 706, 2, "Somali shilling"),
    Currency::new("SRD", 968, 2, "Surinamese dollar"),
    Currency::new("SSP", 728, 2, "South Sudanese pound"),
    Currency::new("STD", 678, 2, "São Tomé and Príncipe dobra"),
    Currency::new("SYP", 760, 2, "Syrian pound"),
    Currency::new("SZL", 748, 2, "Swazi lilangeni"),
    Currency::new("THB", 764, 2, "Thai baht"),
    Currency::new("TJS", 972, 2, "Tajikistani somoni"),
    Currency::new("TMT", 934, 2, "Turkmenistani manat"),
    Currency::new("TND", 788, 3, "Tunisian dinar"),
    Currency::new("TOP", 776, 2, "Tongan paʻanga"),
    Currency::new("TRY", 949, 2, "Turkish lira"),
    Currency::new("TTD", 780, 2, "Trinidad and Tobago dollar"),
    Currency::new("TWD", 901, 2, "New Taiwan dollar"),
    Currency::new("TZS", 834, 2, "Tanzanian shilling"),
    Currency::new("UAH", 980, 2, "Ukrainian hryvnia"),
    Currency::new("UGX", 800, 0, "Ugandan shilling"),
    Currency::new("USD", 840, 2, "United States dollar"),
    Currency::new("USN", 997, 2, "United States dollar (next day) (funds code)"),
    Currency::new("USS", 998, 2, "United States dollar (same day) (funds code)"),
    Currency::new("UYI", 940, 0, "Uruguay Peso en Unidades Indexadas (URUIURUI) (funds code)"),
    Currency::new("UYU", 858, 2, "Uruguayan peso"),
    Currency::new("UZS", 860, 2, "Uzbekistan som"),
    Currency::new("VEF", 937, 2, "Venezuelan bolívar"),
    Currency::new("VND", 704, 0, "Vietnamese dong"),
    Currency::new("VUV", 548, 0, "Vanuatu vatu"),
    Currency::new("WST", 882, 2, "Samoan tala"),
    Currency::new("XAF", 950, 0, "CFA franc BEAC"),
    Currency::new("XCD", 951, 2, "East Caribbean dollar"),
    Currency::new("XOF", 952, 0, "CFA franc BCEAO"),
    Currency::new("XPF", 953, 0, "CFP franc (franc Pacifique)"),
    Currency::new("YER", 886, 2, "Yemeni rial"),
    Currency::new("ZAR", 710, 2, "South African rand"),
    Currency::new("ZMW", 967, 2, "Zambian kwacha"),
];
