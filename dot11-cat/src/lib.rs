use colored::*;
use dot11_frame::*;

struct Writer<'b> {
    buffer: &'b mut String,
    indent: usize,
}

impl<'b> Writer<'b> {
    fn new(buffer: &'b mut String) -> Self {
        Self { buffer, indent: 0 }
    }

    fn increase_indent(&mut self) {
        self.indent += 2;
    }

    fn decrease_indent(&mut self) {
        self.indent -= 2;
    }

    fn write(&mut self, s: String) {
        self.buffer.push_str(&" ".repeat(self.indent));
        self.buffer.push_str(&s);
    }

    fn writeln(&mut self, s: String) {
        self.write(s);
        self.buffer.push('\n');
    }

    fn section(&mut self, title: &str) {
        self.writeln(title.underline().bold().to_string());
    }

    fn field(&mut self, name: &str, value: impl std::fmt::Display) {
        self.writeln(format!("{}: {}", name.bold(), value));
    }
}

fn address_class(address: &MacAddress) -> &'static str {
    if address.is_broadcast() {
        " (broadcast)"
    } else if address.is_multicast() {
        " (multicast)"
    } else {
        ""
    }
}

pub struct FrameParser {}

impl FrameParser {
    /// Parse a hex encoded management frame without FCS.
    pub fn parse_hex(input: &str) -> Result<String> {
        let data = hex::decode(input).map_err(|_| Error)?;
        Self::parse(&data)
    }

    /// Parse a hex encoded management frame followed by its FCS.
    pub fn parse_hex_with_fcs(input: &str) -> Result<String> {
        let data = hex::decode(input).map_err(|_| Error)?;
        Self::parse_with_fcs(&data)
    }

    /// Parse a management frame followed by its FCS. The FCS has to match.
    pub fn parse_with_fcs(input: &[u8]) -> Result<String> {
        let with_fcs = MgmtFrameWithFcs::new(input)?;
        let mut output = Self::parse(with_fcs.content())?;

        let mut w = Writer::new(&mut output);
        w.section("FCS");
        w.increase_indent();
        w.field("fcs", format!("{:#010x} (valid)", with_fcs.fcs()));

        Ok(output)
    }

    /// Parse a management frame without FCS.
    pub fn parse(input: &[u8]) -> Result<String> {
        let frame = MgmtFrame::new(input)?;
        let mut buffer = String::new();

        let mut w = Writer::new(&mut buffer);

        let fc = frame.frame_control();

        // -----------------------------------------------------------------
        // Frame Control
        // -----------------------------------------------------------------
        w.section("Frame Control");
        w.increase_indent();
        w.field("frame type", format!("{:?}", fc.frame_type()).bright_blue());
        w.field(
            "subtype",
            match fc.mgmt_subtype() {
                Some(subtype) => format!("{subtype:?}").bright_blue(),
                None => fc.subtype().to_string().normal(),
            },
        );
        w.field("version", fc.protocol_version());
        w.field("to ds", fc.to_ds() as usize);
        w.field("from ds", fc.from_ds() as usize);
        w.field("more fragments", fc.more_fragments() as usize);
        w.field("retry", fc.retry() as usize);
        w.field("power management", fc.power_management() as usize);
        w.field("more data", fc.more_data() as usize);
        w.field("protected", fc.protected() as usize);
        w.field("order", fc.order() as usize);
        w.decrease_indent();

        // -----------------------------------------------------------------
        // Duration
        // -----------------------------------------------------------------
        w.section("Duration");
        w.increase_indent();
        w.field("duration", frame.header().duration());
        w.decrease_indent();

        // -----------------------------------------------------------------
        // Addressing
        // -----------------------------------------------------------------
        w.section("Addressing");
        w.increase_indent();
        let dst = frame.dst_address();
        w.field("dst addr", format!("{dst}{}", address_class(&dst)));
        let src = frame.src_address();
        w.field("src addr", format!("{src}{}", address_class(&src)));
        w.field("bssid", frame.bssid());
        w.decrease_indent();

        // -----------------------------------------------------------------
        // Sequence Control
        // -----------------------------------------------------------------
        w.section("Sequence Control");
        w.increase_indent();
        w.field("sequence number", frame.sequence_number());
        w.field("fragment number", frame.fragment_number());
        w.decrease_indent();

        // -----------------------------------------------------------------
        // HT Control
        // -----------------------------------------------------------------
        if let Some(ht_control) = frame.ht_control() {
            w.section("HT Control");
            w.increase_indent();
            w.field("ht control", format!("{ht_control:#010x}"));
            w.decrease_indent();
        }

        // -----------------------------------------------------------------
        // Body
        // -----------------------------------------------------------------
        match frame.reason_code_body() {
            Some(body) => {
                w.section("Reason Code");
                w.increase_indent();
                w.field("reason code", body.reason_code());
                w.decrease_indent();

                if !body.elements().is_empty() {
                    w.section("Elements");
                    w.increase_indent();
                    w.writeln(format!("{:x?}", body.elements()));
                    w.decrease_indent();
                }
            }
            None if !frame.body().is_empty() => {
                w.section("Body");
                w.increase_indent();
                w.writeln(format!("{:x?}", frame.body()));
                w.decrease_indent();
            }
            None => (),
        }

        Ok(buffer)
    }
}
