/*!
# Statements
*/

#[path = "statements/end.rs"]
#[allow(non_snake_case)]
pub mod END;

#[path = "statements/exit.rs"]
#[allow(non_snake_case)]
pub mod EXIT;

#[path = "statements/for.rs"]
#[allow(non_snake_case)]
pub mod FOR;

#[path = "statements/gosub.rs"]
#[allow(non_snake_case)]
pub mod GOSUB;

#[path = "statements/goto.rs"]
#[allow(non_snake_case)]
pub mod GOTO;

#[path = "statements/if.rs"]
#[allow(non_snake_case)]
pub mod IF;

#[path = "statements/input.rs"]
#[allow(non_snake_case)]
pub mod INPUT;

#[path = "statements/let.rs"]
#[allow(non_snake_case)]
pub mod LET;

#[path = "statements/list.rs"]
#[allow(non_snake_case)]
pub mod LIST;

#[path = "statements/load.rs"]
#[allow(non_snake_case)]
pub mod LOAD;

#[path = "statements/new.rs"]
#[allow(non_snake_case)]
pub mod NEW;

#[path = "statements/next.rs"]
#[allow(non_snake_case)]
pub mod NEXT;

#[path = "statements/print.rs"]
#[allow(non_snake_case)]
pub mod PRINT;

#[path = "statements/rem.rs"]
#[allow(non_snake_case)]
pub mod REM;

#[path = "statements/return.rs"]
#[allow(non_snake_case)]
pub mod RETURN;

#[path = "statements/run.rs"]
#[allow(non_snake_case)]
pub mod RUN;

#[path = "statements/save.rs"]
#[allow(non_snake_case)]
pub mod SAVE;

#[path = "statements/stop.rs"]
#[allow(non_snake_case)]
pub mod STOP;

pub mod AWRITE {
    /*!
    ## `AWRITE P,V` Sets pin P to output and writes analog level V. V may be `HIGH`, `HI`, `LOW` or `LO`.
    */
}

pub mod BYE {
    /*!
    ## `BYE` Leaves BASIC.
    */
}

pub mod CHAIN {
    /*!
    ## `CHAIN <filename>` Loads a program and runs it.
    */
}

pub mod CLS {
    /*!
    ## `CLS` Clears the screen.
    */
}

pub mod DELAY {
    /*!
    ## `DELAY MS` Waits MS milliseconds. CTRL-C stops the wait.
    */
}

pub mod DLOAD {
    /*!
    ## `DLOAD <filename>,F,N,R` Copies N bytes from file offset F to external RAM at R.
    N of 0 copies to the end of the file.
    */
}

pub mod DWRITE {
    /*!
    ## `DWRITE P,V` Sets pin P to output and writes 0 or 1. V may be `HIGH`, `HI`, `LOW` or `LO`.
    */
}

pub mod FILES {
    /*!
    ## `FILES` Lists the files in the storage directory with their sizes.
    */
}

pub mod MEM {
    /*!
    ## `MEM` Prints the number of bytes left for the program.
    */
}

pub mod NOSONG {
    /*!
    ## `NOSONG` Stops the song.
    */
}

pub mod NOTONE {
    /*!
    ## `NOTONE` Silences the tone.
    */
}

pub mod POKE {
    /*!
    ## `POKE A,V` Writes byte V at address A.
    Addresses past the BASIC memory write the external RAM.
    */
}

pub mod RSEED {
    /*!
    ## `RSEED S` Seeds the random numbers so `RND` repeats.
    */
}

pub mod SFX {
    /*!
    ## `SFX P[,V[,R]]` Plays sound patch P at volume V (192) with retrigger R (1).
    */
}

pub mod SONG {
    /*!
    ## `SONG N` Starts song N.
    */
}

pub mod TONE {
    /*!
    ## `TONE F,D` Plays frequency F for D milliseconds. `TONE 0` is silence.
    */
}

pub mod TONEW {
    /*!
    ## `TONEW F,D` Like `TONE` but waits until the tone is over.
    */
}
