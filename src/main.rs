mod cli;

pub fn main() {
    cli::exec();
}
