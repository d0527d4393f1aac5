use gots_lib::mutations::ALL;

pub fn run() {
    for name in ALL {
        println!("{name}");
    }
}
