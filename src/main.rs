use std::io;

fn main() -> io::Result<()> {
    skylift::run()
}
